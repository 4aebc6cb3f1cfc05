use super::{CourseContent, ExerciseDef, LessonDef, OptionDef, QuestionDef, QuizDef};

pub static COURSE: CourseContent = CourseContent {
    slug: "nodejs-typescript",
    title: "Node.js con TypeScript",
    description: "Programación asíncrona, módulos, Express y pruebas en Node.js usando TypeScript.",
    lessons: &[
        LessonDef { sort_order: 1, title: "Node.js y el event loop" },
        LessonDef { sort_order: 2, title: "Tipos básicos de TypeScript" },
        LessonDef { sort_order: 3, title: "Interfaces y tipos" },
        LessonDef { sort_order: 4, title: "Módulos" },
        LessonDef { sort_order: 5, title: "Promesas y async/await" },
        LessonDef { sort_order: 6, title: "Sistema de archivos" },
        LessonDef { sort_order: 7, title: "Servidores con Express" },
        LessonDef { sort_order: 8, title: "Middleware en Express" },
        LessonDef { sort_order: 9, title: "Validación de datos" },
        LessonDef { sort_order: 10, title: "Pruebas" },
        LessonDef { sort_order: 11, title: "Genéricos" },
        LessonDef { sort_order: 12, title: "Manejo de errores" },
        LessonDef { sort_order: 13, title: "Variables de entorno" },
        LessonDef { sort_order: 14, title: "Streams" },
        LessonDef { sort_order: 15, title: "EventEmitter" },
        LessonDef { sort_order: 16, title: "Patrón repositorio" },
        LessonDef { sort_order: 17, title: "Autenticación con JWT" },
        LessonDef { sort_order: 18, title: "Pruebas de integración" },
        LessonDef { sort_order: 19, title: "Tipos utilitarios" },
        LessonDef { sort_order: 20, title: "Apagado ordenado" },
    ],
    exercises: &[
        ExerciseDef {
            sort_order: 2,
            title: "Funciones tipadas",
            language: "typescript",
            description: r#"## Funciones tipadas

Implementa `promedio(numeros: number[]): number`.

- Devuelve la media aritmética.
- Si el arreglo está vacío devuelve `0`.
"#,
            starter_code: r#"export function promedio(numeros: number[]): number {
  // tu código aquí
  return NaN;
}
"#,
            solution_code: r#"export function promedio(numeros: number[]): number {
  if (numeros.length === 0) {
    return 0;
  }
  const suma = numeros.reduce((acc, n) => acc + n, 0);
  return suma / numeros.length;
}
"#,
        },
        ExerciseDef {
            sort_order: 3,
            title: "Interfaces",
            language: "typescript",
            description: r#"## Interfaces

Define la interfaz `Usuario` con `id` (número), `nombre` (cadena) y `email` opcional.
Luego implementa `etiqueta(usuario)` que devuelva `nombre <email>` o solo `nombre`
cuando no haya email.
"#,
            starter_code: r#"export interface Usuario {}

export function etiqueta(usuario: Usuario): string {
  return "";
}
"#,
            solution_code: r#"export interface Usuario {
  id: number;
  nombre: string;
  email?: string;
}

export function etiqueta(usuario: Usuario): string {
  return usuario.email ? `${usuario.nombre} <${usuario.email}>` : usuario.nombre;
}
"#,
        },
        ExerciseDef {
            sort_order: 4,
            title: "Módulos ES",
            language: "typescript",
            description: r#"## Módulos ES

1. En `texto.ts` exporta `capitalizar(s)` (primera letra en mayúscula) y `contarPalabras(s)`.
2. En `index.ts` reexporta ambas funciones para que puedan importarse desde `./index`.
"#,
            starter_code: r#"// texto.ts
export function capitalizar(s: string): string {
  return s;
}

// index.ts
"#,
            solution_code: r#"// texto.ts
export function capitalizar(s: string): string {
  return s.length === 0 ? s : s[0].toUpperCase() + s.slice(1);
}

export function contarPalabras(s: string): number {
  return s.split(/\s+/).filter(Boolean).length;
}

// index.ts
export { capitalizar, contarPalabras } from "./texto";
"#,
        },
        ExerciseDef {
            sort_order: 5,
            title: "Esperar con async/await",
            language: "typescript",
            description: r#"## Esperar con async/await

1. Implementa `esperar(ms)` que devuelva una promesa resuelta tras `ms` milisegundos.
2. Implementa `obtenerTodos(ids, cargar)` que llame a `cargar` para cada id **en paralelo**
   y devuelva los resultados en el mismo orden.
"#,
            starter_code: r#"export function esperar(ms: number): Promise<void> {
  throw new Error("pendiente");
}

export async function obtenerTodos<T>(
  ids: number[],
  cargar: (id: number) => Promise<T>,
): Promise<T[]> {
  throw new Error("pendiente");
}
"#,
            solution_code: r#"export function esperar(ms: number): Promise<void> {
  return new Promise((resolve) => setTimeout(resolve, ms));
}

export async function obtenerTodos<T>(
  ids: number[],
  cargar: (id: number) => Promise<T>,
): Promise<T[]> {
  return Promise.all(ids.map((id) => cargar(id)));
}
"#,
        },
        ExerciseDef {
            sort_order: 6,
            title: "Contar líneas de un archivo",
            language: "typescript",
            description: r#"## Contar líneas

Usa `fs/promises` para implementar `contarLineas(ruta)`, que lee el archivo como UTF-8
y devuelve cuántas líneas no vacías contiene.
"#,
            starter_code: r#"import { readFile } from "node:fs/promises";

export async function contarLineas(ruta: string): Promise<number> {
  return 0;
}
"#,
            solution_code: r#"import { readFile } from "node:fs/promises";

export async function contarLineas(ruta: string): Promise<number> {
  const contenido = await readFile(ruta, "utf8");
  return contenido.split(/\r?\n/).filter((linea) => linea.trim() !== "").length;
}
"#,
        },
        ExerciseDef {
            sort_order: 7,
            title: "API de tareas con Express",
            language: "typescript",
            description: r#"## API de tareas

Con Express crea:

- `GET /tareas` que responde el arreglo `tareas` en JSON.
- `POST /tareas` que agrega `{ id, titulo }` usando el `titulo` del cuerpo y responde **201**.

Recuerda habilitar `express.json()`.
"#,
            starter_code: r#"import express from "express";

interface Tarea {
  id: number;
  titulo: string;
}

const tareas: Tarea[] = [];
export const app = express();
"#,
            solution_code: r#"import express from "express";

interface Tarea {
  id: number;
  titulo: string;
}

const tareas: Tarea[] = [];
export const app = express();

app.use(express.json());

app.get("/tareas", (_req, res) => {
  res.json(tareas);
});

app.post("/tareas", (req, res) => {
  const tarea: Tarea = { id: tareas.length + 1, titulo: req.body.titulo };
  tareas.push(tarea);
  res.status(201).json(tarea);
});
"#,
        },
        ExerciseDef {
            sort_order: 8,
            title: "Middleware de registro",
            language: "typescript",
            description: r#"## Middleware de registro

Escribe `registrar`, un middleware que imprima `MÉTODO ruta` con `console.log`
y luego llame a `next()`.
"#,
            starter_code: r#"import type { NextFunction, Request, Response } from "express";

export function registrar(req: Request, res: Response, next: NextFunction) {
}
"#,
            solution_code: r#"import type { NextFunction, Request, Response } from "express";

export function registrar(req: Request, _res: Response, next: NextFunction) {
  console.log(`${req.method} ${req.path}`);
  next();
}
"#,
        },
        ExerciseDef {
            sort_order: 9,
            title: "Validar con zod",
            language: "typescript",
            description: r#"## Validar con zod

Define el esquema `NuevaTarea` con `titulo` (cadena de 3 a 100 caracteres) y
`prioridad` (`"baja" | "media" | "alta"`, por defecto `"media"`).
Implementa `parsearTarea(datos)` que devuelva el objeto validado o lance el error de zod.
"#,
            starter_code: r#"import { z } from "zod";

export const NuevaTarea = z.object({});

export function parsearTarea(datos: unknown) {
  return datos;
}
"#,
            solution_code: r#"import { z } from "zod";

export const NuevaTarea = z.object({
  titulo: z.string().min(3).max(100),
  prioridad: z.enum(["baja", "media", "alta"]).default("media"),
});

export function parsearTarea(datos: unknown) {
  return NuevaTarea.parse(datos);
}
"#,
        },
        ExerciseDef {
            sort_order: 10,
            title: "Prueba unitaria",
            language: "typescript",
            description: r#"## Prueba unitaria

Con `node:test` y `node:assert`, prueba que `promedio([2, 4, 6])` sea `4`
y que `promedio([])` sea `0`.
"#,
            starter_code: r#"import { test } from "node:test";
import assert from "node:assert/strict";
import { promedio } from "./promedio";
"#,
            solution_code: r#"import { test } from "node:test";
import assert from "node:assert/strict";
import { promedio } from "./promedio";

test("promedio de varios números", () => {
  assert.equal(promedio([2, 4, 6]), 4);
});

test("promedio de un arreglo vacío", () => {
  assert.equal(promedio([]), 0);
});
"#,
        },
        ExerciseDef {
            sort_order: 11,
            title: "Agrupar con genéricos",
            language: "typescript",
            description: r#"## Agrupar con genéricos

Implementa `agruparPor<T, K extends string>(items, clave)` que devuelva un objeto
cuyas propiedades son el resultado de `clave(item)` y cuyos valores son los items de ese grupo.
"#,
            starter_code: r#"export function agruparPor<T, K extends string>(
  items: T[],
  clave: (item: T) => K,
): Record<K, T[]> {
  return {} as Record<K, T[]>;
}
"#,
            solution_code: r#"export function agruparPor<T, K extends string>(
  items: T[],
  clave: (item: T) => K,
): Record<K, T[]> {
  const grupos = {} as Record<K, T[]>;
  for (const item of items) {
    const k = clave(item);
    (grupos[k] ??= []).push(item);
  }
  return grupos;
}
"#,
        },
        ExerciseDef {
            sort_order: 12,
            title: "Errores HTTP en Express",
            language: "typescript",
            description: r#"## Errores HTTP

1. Crea la clase `HttpError` que extienda `Error` con una propiedad `status`.
2. Escribe el middleware de errores `manejarErrores` que responda con `status` y
   `{ error: mensaje }`, o **500** si el error no es un `HttpError`.
"#,
            starter_code: r#"import type { NextFunction, Request, Response } from "express";

export class HttpError extends Error {}

export function manejarErrores(
  err: Error,
  _req: Request,
  res: Response,
  _next: NextFunction,
) {}
"#,
            solution_code: r#"import type { NextFunction, Request, Response } from "express";

export class HttpError extends Error {
  constructor(
    public status: number,
    message: string,
  ) {
    super(message);
    this.name = "HttpError";
  }
}

export function manejarErrores(
  err: Error,
  _req: Request,
  res: Response,
  _next: NextFunction,
) {
  if (err instanceof HttpError) {
    res.status(err.status).json({ error: err.message });
    return;
  }
  res.status(500).json({ error: "Error interno" });
}
"#,
        },
        ExerciseDef {
            sort_order: 13,
            title: "Cargar la configuración",
            language: "typescript",
            description: r#"## Cargar la configuración

Implementa `cargarConfig(env)` que devuelva `{ puerto, baseDatos }`:

- `PUERTO` es opcional (3000 por defecto) y debe ser un entero positivo.
- `DATABASE_URL` es obligatoria.
- Lanza un `Error` descriptivo si algo no es válido.
"#,
            starter_code: r#"export interface Config {
  puerto: number;
  baseDatos: string;
}

export function cargarConfig(env: NodeJS.ProcessEnv): Config {
  throw new Error("pendiente");
}
"#,
            solution_code: r#"export interface Config {
  puerto: number;
  baseDatos: string;
}

export function cargarConfig(env: NodeJS.ProcessEnv): Config {
  const puerto = Number(env.PUERTO ?? 3000);
  if (!Number.isInteger(puerto) || puerto <= 0) {
    throw new Error(`PUERTO inválido: ${env.PUERTO}`);
  }

  const baseDatos = env.DATABASE_URL;
  if (!baseDatos) {
    throw new Error("Falta DATABASE_URL");
  }

  return { puerto, baseDatos };
}
"#,
        },
        ExerciseDef {
            sort_order: 14,
            title: "Stream en mayúsculas",
            language: "typescript",
            description: r#"## Stream en mayúsculas

Crea `mayusculas()`, un `Transform` que convierta a mayúsculas cada fragmento recibido,
y úsalo con `pipeline` para copiar `entrada.txt` a `salida.txt`.
"#,
            starter_code: r#"import { createReadStream, createWriteStream } from "node:fs";
import { Transform } from "node:stream";
import { pipeline } from "node:stream/promises";

export function mayusculas(): Transform {
  return new Transform();
}
"#,
            solution_code: r#"import { createReadStream, createWriteStream } from "node:fs";
import { Transform } from "node:stream";
import { pipeline } from "node:stream/promises";

export function mayusculas(): Transform {
  return new Transform({
    transform(fragmento, _codificacion, callback) {
      callback(null, fragmento.toString().toUpperCase());
    },
  });
}

export async function copiarEnMayusculas(): Promise<void> {
  await pipeline(
    createReadStream("entrada.txt"),
    mayusculas(),
    createWriteStream("salida.txt"),
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 15,
            title: "Emisor de pedidos",
            language: "typescript",
            description: r#"## Emisor de pedidos

Crea la clase `Pedidos` que extienda `EventEmitter`:

- `crear(total)` genera un id incremental, emite `"creado"` con `{ id, total }` y devuelve el id.
- Si `total` es negativo emite `"error"` con un `Error` en lugar de crear el pedido.
"#,
            starter_code: r#"import { EventEmitter } from "node:events";

export class Pedidos extends EventEmitter {
  crear(total: number): number {
    return 0;
  }
}
"#,
            solution_code: r#"import { EventEmitter } from "node:events";

export class Pedidos extends EventEmitter {
  private siguiente = 1;

  crear(total: number): number {
    if (total < 0) {
      this.emit("error", new Error("Total negativo"));
      return -1;
    }
    const id = this.siguiente++;
    this.emit("creado", { id, total });
    return id;
  }
}
"#,
        },
        ExerciseDef {
            sort_order: 16,
            title: "Repositorio en memoria",
            language: "typescript",
            description: r#"## Repositorio en memoria

Implementa `RepositorioMemoria<T extends { id: number }>` que cumpla la interfaz
`Repositorio<T>`: `buscar(id)`, `todos()`, `guardar(item)` (inserta o reemplaza) y `borrar(id)`.
"#,
            starter_code: r#"export interface Repositorio<T extends { id: number }> {
  buscar(id: number): Promise<T | undefined>;
  todos(): Promise<T[]>;
  guardar(item: T): Promise<void>;
  borrar(id: number): Promise<boolean>;
}

export class RepositorioMemoria<T extends { id: number }> {}
"#,
            solution_code: r#"export interface Repositorio<T extends { id: number }> {
  buscar(id: number): Promise<T | undefined>;
  todos(): Promise<T[]>;
  guardar(item: T): Promise<void>;
  borrar(id: number): Promise<boolean>;
}

export class RepositorioMemoria<T extends { id: number }> implements Repositorio<T> {
  private items = new Map<number, T>();

  async buscar(id: number): Promise<T | undefined> {
    return this.items.get(id);
  }

  async todos(): Promise<T[]> {
    return [...this.items.values()];
  }

  async guardar(item: T): Promise<void> {
    this.items.set(item.id, item);
  }

  async borrar(id: number): Promise<boolean> {
    return this.items.delete(id);
  }
}
"#,
        },
        ExerciseDef {
            sort_order: 17,
            title: "Middleware JWT",
            language: "typescript",
            description: r#"## Middleware JWT

Escribe `autenticar`, que lea `Authorization: Bearer <token>`, lo verifique con
`jsonwebtoken` y el secreto `process.env.JWT_SECRET`, guarde el payload en `res.locals.usuario`
y llame a `next()`. Si falla, responde **401**.
"#,
            starter_code: r#"import type { NextFunction, Request, Response } from "express";
import jwt from "jsonwebtoken";

export function autenticar(req: Request, res: Response, next: NextFunction) {
  next();
}
"#,
            solution_code: r#"import type { NextFunction, Request, Response } from "express";
import jwt from "jsonwebtoken";

export function autenticar(req: Request, res: Response, next: NextFunction) {
  const cabecera = req.headers.authorization ?? "";
  const [tipo, token] = cabecera.split(" ");
  if (tipo !== "Bearer" || !token) {
    res.status(401).json({ error: "Token requerido" });
    return;
  }

  try {
    res.locals.usuario = jwt.verify(token, process.env.JWT_SECRET as string);
    next();
  } catch {
    res.status(401).json({ error: "Token inválido" });
  }
}
"#,
        },
        ExerciseDef {
            sort_order: 18,
            title: "Probar la API con supertest",
            language: "typescript",
            description: r#"## Probar la API

Con `supertest` y `node:test`, prueba la API de tareas:

1. `POST /tareas` con `{ titulo: "Leer" }` responde **201**.
2. Después, `GET /tareas` contiene una tarea con ese título.
"#,
            starter_code: r#"import { test } from "node:test";
import assert from "node:assert/strict";
import request from "supertest";
import { app } from "./app";
"#,
            solution_code: r#"import { test } from "node:test";
import assert from "node:assert/strict";
import request from "supertest";
import { app } from "./app";

test("crear y listar tareas", async () => {
  const creada = await request(app).post("/tareas").send({ titulo: "Leer" });
  assert.equal(creada.status, 201);

  const lista = await request(app).get("/tareas");
  assert.equal(lista.status, 200);
  assert.ok(lista.body.some((t: { titulo: string }) => t.titulo === "Leer"));
});
"#,
        },
        ExerciseDef {
            sort_order: 19,
            title: "Tipos utilitarios",
            language: "typescript",
            description: r#"## Tipos utilitarios

A partir de `Producto` define:

- `NuevoProducto`: todo salvo `id` (usa `Omit`).
- `CambiosProducto`: campos opcionales excepto `id` (usa `Partial` y `Omit`).
- `actualizar(p, cambios)` que devuelva un nuevo producto con los cambios aplicados.
"#,
            starter_code: r#"export interface Producto {
  id: number;
  nombre: string;
  precio: number;
}
"#,
            solution_code: r#"export interface Producto {
  id: number;
  nombre: string;
  precio: number;
}

export type NuevoProducto = Omit<Producto, "id">;
export type CambiosProducto = Partial<Omit<Producto, "id">>;

export function actualizar(p: Producto, cambios: CambiosProducto): Producto {
  return { ...p, ...cambios };
}
"#,
        },
        ExerciseDef {
            sort_order: 20,
            title: "Cierre ordenado del servidor",
            language: "typescript",
            description: r#"## Cierre ordenado

Arranca `app` en el puerto 3000 y, al recibir `SIGTERM`, deja de aceptar conexiones,
espera a que terminen las activas y sale con código 0.
"#,
            starter_code: r#"import { app } from "./app";

app.listen(3000);
"#,
            solution_code: r#"import { app } from "./app";

const servidor = app.listen(3000, () => {
  console.log("Escuchando en el puerto 3000");
});

process.on("SIGTERM", () => {
  console.log("Cerrando servidor...");
  servidor.close(() => {
    process.exit(0);
  });
});
"#,
        },
    ],
    quiz: QuizDef {
        title: "Evaluación de Node.js y TypeScript",
        description: None,
        questions: &[
            QuestionDef {
                question: "¿Qué hace `Promise.all` si una de las promesas se rechaza?",
                explanation: Some("`Promise.all` se rechaza con el primer error; `Promise.allSettled` espera a todas."),
                options: &[
                    OptionDef { text: "Ignora el error y continúa", correct: false },
                    OptionDef { text: "Se rechaza con ese error", correct: true },
                    OptionDef { text: "Devuelve undefined para esa posición", correct: false },
                    OptionDef { text: "Reintenta la promesa", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Cómo se marca una propiedad opcional en una interfaz de TypeScript?",
                explanation: None,
                options: &[
                    OptionDef { text: "email: optional string", correct: false },
                    OptionDef { text: "email?: string", correct: true },
                    OptionDef { text: "email: string | void", correct: false },
                    OptionDef { text: "?email: string", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué middleware de Express interpreta cuerpos JSON?",
                explanation: None,
                options: &[
                    OptionDef { text: "express.static()", correct: false },
                    OptionDef { text: "express.urlencoded()", correct: false },
                    OptionDef { text: "express.json()", correct: true },
                    OptionDef { text: "express.Router()", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué ocurre si un middleware no llama a `next()` ni responde?",
                explanation: Some("La petición queda pendiente hasta que el cliente agote su tiempo de espera."),
                options: &[
                    OptionDef { text: "Express llama a next() automáticamente", correct: false },
                    OptionDef { text: "La petición queda colgada", correct: true },
                    OptionDef { text: "Se responde 404", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué módulo expone la API de archivos basada en promesas?",
                explanation: None,
                options: &[
                    OptionDef { text: "node:fs/promises", correct: true },
                    OptionDef { text: "node:path", correct: false },
                    OptionDef { text: "node:stream", correct: false },
                    OptionDef { text: "node:os", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué tipo de TypeScript conviene usar para datos de entrada aún no validados?",
                explanation: Some("`unknown` obliga a comprobar el tipo antes de usar el valor, a diferencia de `any`."),
                options: &[
                    OptionDef { text: "any", correct: false },
                    OptionDef { text: "object", correct: false },
                    OptionDef { text: "unknown", correct: true },
                    OptionDef { text: "never", correct: false },
                ],
            },
        ],
    },
};
