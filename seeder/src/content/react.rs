use super::{CourseContent, ExerciseDef, LessonDef, OptionDef, QuestionDef, QuizDef};

pub static COURSE: CourseContent = CourseContent {
    slug: "react",
    title: "React paso a paso",
    description: "Componentes, props, estado, efectos y hooks personalizados para construir interfaces con React.",
    lessons: &[
        LessonDef { sort_order: 1, title: "¿Por qué React?" },
        LessonDef { sort_order: 2, title: "JSX" },
        LessonDef { sort_order: 3, title: "Componentes y props" },
        LessonDef { sort_order: 4, title: "Estado con useState" },
        LessonDef { sort_order: 5, title: "Eventos" },
        LessonDef { sort_order: 6, title: "Renderizado de listas" },
        LessonDef { sort_order: 7, title: "Formularios controlados" },
        LessonDef { sort_order: 8, title: "Efectos con useEffect" },
        LessonDef { sort_order: 9, title: "Contexto" },
        LessonDef { sort_order: 10, title: "Hooks personalizados" },
        LessonDef { sort_order: 11, title: "useReducer" },
        LessonDef { sort_order: 12, title: "Referencias con useRef" },
        LessonDef { sort_order: 13, title: "useMemo y useCallback" },
        LessonDef { sort_order: 14, title: "Composición con children" },
        LessonDef { sort_order: 15, title: "React Router" },
        LessonDef { sort_order: 16, title: "Límites de error" },
        LessonDef { sort_order: 17, title: "Carga diferida y Suspense" },
        LessonDef { sort_order: 18, title: "Pruebas con Testing Library" },
        LessonDef { sort_order: 19, title: "Portales" },
        LessonDef { sort_order: 20, title: "Optimización con memo" },
    ],
    exercises: &[
        ExerciseDef {
            sort_order: 2,
            title: "Expresiones en JSX",
            language: "jsx",
            description: r#"## Expresiones en JSX

Completa `Saludo` para que muestre `<h1>Hola, {nombre}</h1>` y, debajo,
un párrafo con la fecha de hoy usando `new Date().toLocaleDateString("es")`.
"#,
            starter_code: r#"export default function Saludo() {
  const nombre = "Ada";
  return null;
}
"#,
            solution_code: r#"export default function Saludo() {
  const nombre = "Ada";
  return (
    <>
      <h1>Hola, {nombre}</h1>
      <p>{new Date().toLocaleDateString("es")}</p>
    </>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 3,
            title: "Tarjeta de perfil",
            language: "jsx",
            description: r#"## Tarjeta de perfil

Crea el componente `Tarjeta` que reciba las props `nombre`, `rol` y `avatar`
y muestre la imagen (con `alt` igual al nombre), el nombre en un `<h2>` y el rol en un `<p>`.
Si no se pasa `rol`, muestra `Estudiante`.
"#,
            starter_code: r#"export function Tarjeta(props) {
  return <div className="tarjeta"></div>;
}
"#,
            solution_code: r#"export function Tarjeta({ nombre, rol = "Estudiante", avatar }) {
  return (
    <div className="tarjeta">
      <img src={avatar} alt={nombre} />
      <h2>{nombre}</h2>
      <p>{rol}</p>
    </div>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 4,
            title: "Contador",
            language: "jsx",
            description: r#"## Contador

Implementa `Contador` con `useState`:

- Muestra el valor actual.
- Botón `+` incrementa en 1 y botón `-` decrementa en 1 sin bajar de 0.
"#,
            starter_code: r#"import { useState } from "react";

export function Contador() {
  return <div></div>;
}
"#,
            solution_code: r#"import { useState } from "react";

export function Contador() {
  const [valor, setValor] = useState(0);

  return (
    <div>
      <span>{valor}</span>
      <button onClick={() => setValor((v) => v + 1)}>+</button>
      <button onClick={() => setValor((v) => Math.max(0, v - 1))}>-</button>
    </div>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 5,
            title: "Mostrar y ocultar",
            language: "jsx",
            description: r#"## Mostrar y ocultar

`Acordeon` recibe `titulo` y `children`. Al hacer clic en el botón del título
alterna la visibilidad del contenido. El botón muestra `▸` cerrado y `▾` abierto.
"#,
            starter_code: r#"import { useState } from "react";

export function Acordeon({ titulo, children }) {
  return (
    <section>
      <button>{titulo}</button>
      {children}
    </section>
  );
}
"#,
            solution_code: r#"import { useState } from "react";

export function Acordeon({ titulo, children }) {
  const [abierto, setAbierto] = useState(false);

  return (
    <section>
      <button onClick={() => setAbierto((a) => !a)}>
        {abierto ? "▾" : "▸"} {titulo}
      </button>
      {abierto && <div>{children}</div>}
    </section>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 6,
            title: "Lista con claves",
            language: "jsx",
            description: r#"## Lista con claves

`ListaTareas` recibe `tareas` (arreglo de `{ id, titulo, hecha }`).

- Renderiza un `<li>` por tarea usando `id` como `key`.
- Tacha las tareas hechas con `style={{ textDecoration: "line-through" }}`.
- Si no hay tareas muestra `<p>Nada pendiente</p>`.
"#,
            starter_code: r#"export function ListaTareas({ tareas }) {
  return <ul></ul>;
}
"#,
            solution_code: r#"export function ListaTareas({ tareas }) {
  if (tareas.length === 0) {
    return <p>Nada pendiente</p>;
  }

  return (
    <ul>
      {tareas.map((tarea) => (
        <li
          key={tarea.id}
          style={tarea.hecha ? { textDecoration: "line-through" } : undefined}
        >
          {tarea.titulo}
        </li>
      ))}
    </ul>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 7,
            title: "Formulario controlado",
            language: "jsx",
            description: r#"## Formulario controlado

`NuevaTarea` recibe `onAgregar(titulo)`.

- Mantén el texto del input en el estado.
- Al enviar el formulario evita la recarga, llama a `onAgregar` con el texto sin espacios
  extremos y limpia el input.
- No llames a `onAgregar` si el texto está vacío.
"#,
            starter_code: r#"import { useState } from "react";

export function NuevaTarea({ onAgregar }) {
  return (
    <form>
      <input />
      <button type="submit">Agregar</button>
    </form>
  );
}
"#,
            solution_code: r#"import { useState } from "react";

export function NuevaTarea({ onAgregar }) {
  const [texto, setTexto] = useState("");

  function enviar(evento) {
    evento.preventDefault();
    const titulo = texto.trim();
    if (!titulo) return;
    onAgregar(titulo);
    setTexto("");
  }

  return (
    <form onSubmit={enviar}>
      <input value={texto} onChange={(e) => setTexto(e.target.value)} />
      <button type="submit">Agregar</button>
    </form>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 8,
            title: "Cargar datos con useEffect",
            language: "jsx",
            description: r#"## Cargar datos

`Usuarios` debe pedir `https://api.ejemplo.dev/usuarios` al montarse y mostrar los nombres.

- Muestra `Cargando...` mientras llega la respuesta.
- Ignora la respuesta si el componente se desmontó antes de que llegara.
"#,
            starter_code: r#"import { useEffect, useState } from "react";

export function Usuarios() {
  return null;
}
"#,
            solution_code: r#"import { useEffect, useState } from "react";

export function Usuarios() {
  const [usuarios, setUsuarios] = useState(null);

  useEffect(() => {
    let activo = true;
    fetch("https://api.ejemplo.dev/usuarios")
      .then((r) => r.json())
      .then((datos) => {
        if (activo) setUsuarios(datos);
      });
    return () => {
      activo = false;
    };
  }, []);

  if (usuarios === null) return <p>Cargando...</p>;

  return (
    <ul>
      {usuarios.map((u) => (
        <li key={u.id}>{u.nombre}</li>
      ))}
    </ul>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 9,
            title: "Tema con contexto",
            language: "jsx",
            description: r#"## Tema con contexto

Crea `TemaContext` con valor por defecto `"claro"`, un `TemaProvider` que guarde el tema
en el estado y exponga `{ tema, alternar }`, y el componente `BotonTema` que muestre
el tema actual y lo alterne al hacer clic.
"#,
            starter_code: r#"import { createContext, useContext, useState } from "react";

export const TemaContext = createContext();
"#,
            solution_code: r#"import { createContext, useContext, useState } from "react";

export const TemaContext = createContext({ tema: "claro", alternar: () => {} });

export function TemaProvider({ children }) {
  const [tema, setTema] = useState("claro");
  const alternar = () => setTema((t) => (t === "claro" ? "oscuro" : "claro"));

  return (
    <TemaContext.Provider value={{ tema, alternar }}>
      {children}
    </TemaContext.Provider>
  );
}

export function BotonTema() {
  const { tema, alternar } = useContext(TemaContext);
  return <button onClick={alternar}>Tema: {tema}</button>;
}
"#,
        },
        ExerciseDef {
            sort_order: 10,
            title: "Hook useLocalStorage",
            language: "jsx",
            description: r#"## Hook `useLocalStorage`

Implementa `useLocalStorage(clave, inicial)` que funcione como `useState`
pero persista el valor en `localStorage` como JSON.
"#,
            starter_code: r#"import { useState } from "react";

export function useLocalStorage(clave, inicial) {
  return useState(inicial);
}
"#,
            solution_code: r#"import { useEffect, useState } from "react";

export function useLocalStorage(clave, inicial) {
  const [valor, setValor] = useState(() => {
    const guardado = localStorage.getItem(clave);
    return guardado !== null ? JSON.parse(guardado) : inicial;
  });

  useEffect(() => {
    localStorage.setItem(clave, JSON.stringify(valor));
  }, [clave, valor]);

  return [valor, setValor];
}
"#,
        },
        ExerciseDef {
            sort_order: 11,
            title: "Carrito con useReducer",
            language: "jsx",
            description: r#"## Carrito con `useReducer`

Implementa el reductor `carrito(estado, accion)` con las acciones:

- `agregar` (`producto`): suma 1 a la cantidad o agrega el producto con cantidad 1.
- `quitar` (`id`): elimina el producto.
- `vaciar`: deja el carrito vacío.
"#,
            starter_code: r#"export function carrito(estado, accion) {
  return estado;
}
"#,
            solution_code: r#"export function carrito(estado, accion) {
  switch (accion.type) {
    case "agregar": {
      const existe = estado.find((p) => p.id === accion.producto.id);
      if (existe) {
        return estado.map((p) =>
          p.id === accion.producto.id ? { ...p, cantidad: p.cantidad + 1 } : p,
        );
      }
      return [...estado, { ...accion.producto, cantidad: 1 }];
    }
    case "quitar":
      return estado.filter((p) => p.id !== accion.id);
    case "vaciar":
      return [];
    default:
      throw new Error(`Acción desconocida: ${accion.type}`);
  }
}
"#,
        },
        ExerciseDef {
            sort_order: 12,
            title: "Enfocar un campo",
            language: "jsx",
            description: r#"## Enfocar un campo

`Buscador` debe enfocar su input automáticamente al montarse y ofrecer un botón
`Limpiar` que vacíe el texto y devuelva el foco al input.
"#,
            starter_code: r#"import { useEffect, useRef, useState } from "react";

export function Buscador() {
  return <input />;
}
"#,
            solution_code: r#"import { useEffect, useRef, useState } from "react";

export function Buscador() {
  const [texto, setTexto] = useState("");
  const input = useRef(null);

  useEffect(() => {
    input.current.focus();
  }, []);

  function limpiar() {
    setTexto("");
    input.current.focus();
  }

  return (
    <div>
      <input ref={input} value={texto} onChange={(e) => setTexto(e.target.value)} />
      <button onClick={limpiar}>Limpiar</button>
    </div>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 13,
            title: "Filtrar sin recalcular",
            language: "jsx",
            description: r#"## Filtrar sin recalcular

`Catalogo` recibe `productos` y mantiene un `filtro` en el estado.
Calcula la lista filtrada (sin distinguir mayúsculas) con `useMemo` para que
solo se recalcule cuando cambien `productos` o `filtro`.
"#,
            starter_code: r#"import { useMemo, useState } from "react";

export function Catalogo({ productos }) {
  const [filtro, setFiltro] = useState("");
  const visibles = productos;

  return (
    <>
      <input value={filtro} onChange={(e) => setFiltro(e.target.value)} />
      <ul>
        {visibles.map((p) => (
          <li key={p.id}>{p.nombre}</li>
        ))}
      </ul>
    </>
  );
}
"#,
            solution_code: r#"import { useMemo, useState } from "react";

export function Catalogo({ productos }) {
  const [filtro, setFiltro] = useState("");
  const visibles = useMemo(() => {
    const f = filtro.toLowerCase();
    return productos.filter((p) => p.nombre.toLowerCase().includes(f));
  }, [productos, filtro]);

  return (
    <>
      <input value={filtro} onChange={(e) => setFiltro(e.target.value)} />
      <ul>
        {visibles.map((p) => (
          <li key={p.id}>{p.nombre}</li>
        ))}
      </ul>
    </>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 14,
            title: "Panel reutilizable",
            language: "jsx",
            description: r#"## Panel reutilizable

Crea `Panel` que reciba `titulo`, `acciones` (opcional) y `children`, y renderice:

- Un `<header>` con el título en `<h3>` y, si existen, las acciones.
- Un `<div className="panel-cuerpo">` con los `children`.
"#,
            starter_code: r#"export function Panel(props) {
  return <section className="panel"></section>;
}
"#,
            solution_code: r#"export function Panel({ titulo, acciones, children }) {
  return (
    <section className="panel">
      <header>
        <h3>{titulo}</h3>
        {acciones && <div className="panel-acciones">{acciones}</div>}
      </header>
      <div className="panel-cuerpo">{children}</div>
    </section>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 15,
            title: "Rutas con parámetros",
            language: "jsx",
            description: r#"## Rutas con parámetros

Configura React Router con:

- `/` que muestre `Inicio`.
- `/cursos/:slug` que muestre `Curso`, el cual lee `slug` con `useParams`.
- Cualquier otra ruta muestra `No encontrado`.
"#,
            starter_code: r#"import { BrowserRouter, Route, Routes, useParams } from "react-router-dom";
import { Inicio } from "./Inicio";

export function App() {
  return <BrowserRouter></BrowserRouter>;
}
"#,
            solution_code: r#"import { BrowserRouter, Route, Routes, useParams } from "react-router-dom";
import { Inicio } from "./Inicio";

function Curso() {
  const { slug } = useParams();
  return <h1>Curso: {slug}</h1>;
}

export function App() {
  return (
    <BrowserRouter>
      <Routes>
        <Route path="/" element={<Inicio />} />
        <Route path="/cursos/:slug" element={<Curso />} />
        <Route path="*" element={<p>No encontrado</p>} />
      </Routes>
    </BrowserRouter>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 16,
            title: "Límite de error",
            language: "jsx",
            description: r#"## Límite de error

Implementa `LimiteError`, un componente de clase que capture errores de sus hijos
con `getDerivedStateFromError` y muestre `Algo salió mal` en lugar de los hijos.
Registra el error con `console.error` en `componentDidCatch`.
"#,
            starter_code: r#"import { Component } from "react";

export class LimiteError extends Component {
  render() {
    return this.props.children;
  }
}
"#,
            solution_code: r#"import { Component } from "react";

export class LimiteError extends Component {
  state = { error: null };

  static getDerivedStateFromError(error) {
    return { error };
  }

  componentDidCatch(error, info) {
    console.error(error, info.componentStack);
  }

  render() {
    if (this.state.error) {
      return <p>Algo salió mal</p>;
    }
    return this.props.children;
  }
}
"#,
        },
        ExerciseDef {
            sort_order: 17,
            title: "Cargar un componente bajo demanda",
            language: "jsx",
            description: r#"## Carga diferida

Carga `Estadisticas` desde `./Estadisticas` con `lazy` y muéstralo dentro de
`Suspense` con el fallback `<p>Cargando estadísticas...</p>`, solo cuando el
usuario pulse `Ver estadísticas`.
"#,
            starter_code: r#"import { lazy, Suspense, useState } from "react";
import Estadisticas from "./Estadisticas";

export function Tablero() {
  return <Estadisticas />;
}
"#,
            solution_code: r#"import { lazy, Suspense, useState } from "react";

const Estadisticas = lazy(() => import("./Estadisticas"));

export function Tablero() {
  const [ver, setVer] = useState(false);

  return (
    <div>
      <button onClick={() => setVer(true)}>Ver estadísticas</button>
      {ver && (
        <Suspense fallback={<p>Cargando estadísticas...</p>}>
          <Estadisticas />
        </Suspense>
      )}
    </div>
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 18,
            title: "Probar el contador",
            language: "jsx",
            description: r#"## Probar el contador

Con Testing Library y `user-event`, prueba que `Contador`:

1. Empieza en `0`.
2. Muestra `1` tras pulsar `+`.
3. No baja de `0` al pulsar `-`.
"#,
            starter_code: r#"import { render, screen } from "@testing-library/react";
import userEvent from "@testing-library/user-event";
import { Contador } from "./Contador";
"#,
            solution_code: r#"import { render, screen } from "@testing-library/react";
import userEvent from "@testing-library/user-event";
import { Contador } from "./Contador";

test("incrementa y no baja de cero", async () => {
  const usuario = userEvent.setup();
  render(<Contador />);

  expect(screen.getByText("0")).toBeInTheDocument();

  await usuario.click(screen.getByRole("button", { name: "+" }));
  expect(screen.getByText("1")).toBeInTheDocument();

  await usuario.click(screen.getByRole("button", { name: "-" }));
  await usuario.click(screen.getByRole("button", { name: "-" }));
  expect(screen.getByText("0")).toBeInTheDocument();
});
"#,
        },
        ExerciseDef {
            sort_order: 19,
            title: "Notificación en un portal",
            language: "jsx",
            description: r#"## Notificación en un portal

`Aviso` recibe `mensaje` y `onCerrar`, y debe renderizarse dentro de
`document.body` mediante `createPortal`, con un botón `Cerrar` que llame a `onCerrar`.
"#,
            starter_code: r#"import { createPortal } from "react-dom";

export function Aviso({ mensaje, onCerrar }) {
  return <div className="aviso">{mensaje}</div>;
}
"#,
            solution_code: r#"import { createPortal } from "react-dom";

export function Aviso({ mensaje, onCerrar }) {
  return createPortal(
    <div className="aviso" role="alert">
      {mensaje}
      <button onClick={onCerrar}>Cerrar</button>
    </div>,
    document.body,
  );
}
"#,
        },
        ExerciseDef {
            sort_order: 20,
            title: "Evitar renderizados con memo",
            language: "jsx",
            description: r#"## Evitar renderizados

`Fila` recibe `tarea` y `onAlternar`. Envuélvela con `memo` y, en `Lista`,
estabiliza `onAlternar` con `useCallback` para que cambiar una tarea no vuelva
a renderizar las demás filas.
"#,
            starter_code: r#"import { memo, useCallback, useState } from "react";

function Fila({ tarea, onAlternar }) {
  return <li onClick={() => onAlternar(tarea.id)}>{tarea.titulo}</li>;
}

export function Lista({ iniciales }) {
  const [tareas, setTareas] = useState(iniciales);
  const alternar = (id) =>
    setTareas((ts) => ts.map((t) => (t.id === id ? { ...t, hecha: !t.hecha } : t)));

  return (
    <ul>
      {tareas.map((t) => (
        <Fila key={t.id} tarea={t} onAlternar={alternar} />
      ))}
    </ul>
  );
}
"#,
            solution_code: r#"import { memo, useCallback, useState } from "react";

const Fila = memo(function Fila({ tarea, onAlternar }) {
  return <li onClick={() => onAlternar(tarea.id)}>{tarea.titulo}</li>;
});

export function Lista({ iniciales }) {
  const [tareas, setTareas] = useState(iniciales);
  const alternar = useCallback(
    (id) => setTareas((ts) => ts.map((t) => (t.id === id ? { ...t, hecha: !t.hecha } : t))),
    [],
  );

  return (
    <ul>
      {tareas.map((t) => (
        <Fila key={t.id} tarea={t} onAlternar={alternar} />
      ))}
    </ul>
  );
}
"#,
        },
    ],
    quiz: QuizDef {
        title: "Evaluación de React",
        description: Some("Componentes, estado y hooks."),
        questions: &[
            QuestionDef {
                question: "¿Por qué cada elemento de una lista necesita una prop `key`?",
                explanation: Some("Las claves permiten a React identificar qué elementos cambiaron entre renderizados."),
                options: &[
                    OptionDef { text: "Para aplicar estilos CSS", correct: false },
                    OptionDef { text: "Para identificar elementos entre renderizados", correct: true },
                    OptionDef { text: "Para ordenar la lista automáticamente", correct: false },
                    OptionDef { text: "Es obligatoria solo en producción", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Cuándo se ejecuta un `useEffect` con arreglo de dependencias vacío?",
                explanation: None,
                options: &[
                    OptionDef { text: "En cada renderizado", correct: false },
                    OptionDef { text: "Solo al montar el componente", correct: true },
                    OptionDef { text: "Nunca", correct: false },
                    OptionDef { text: "Solo al desmontar", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué devuelve `useState`?",
                explanation: None,
                options: &[
                    OptionDef { text: "El valor actual", correct: false },
                    OptionDef { text: "Un objeto con get y set", correct: false },
                    OptionDef { text: "Un par [valor, función para actualizarlo]", correct: true },
                ],
            },
            QuestionDef {
                question: "¿Qué atributo se usa en JSX en lugar de `class`?",
                explanation: None,
                options: &[
                    OptionDef { text: "class", correct: false },
                    OptionDef { text: "className", correct: true },
                    OptionDef { text: "cssClass", correct: false },
                    OptionDef { text: "styleName", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué caracteriza a un formulario controlado?",
                explanation: Some("El valor del input proviene del estado y cada cambio lo actualiza mediante `onChange`."),
                options: &[
                    OptionDef { text: "El DOM guarda el valor y se lee con una ref", correct: false },
                    OptionDef { text: "El estado de React es la fuente de verdad del valor", correct: true },
                    OptionDef { text: "No puede tener validación", correct: false },
                    OptionDef { text: "Se envía sin JavaScript", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué regla deben cumplir los nombres de hooks personalizados?",
                explanation: None,
                options: &[
                    OptionDef { text: "Empezar con «use»", correct: true },
                    OptionDef { text: "Terminar en «Hook»", correct: false },
                    OptionDef { text: "Estar en mayúsculas", correct: false },
                    OptionDef { text: "Ninguna", correct: false },
                ],
            },
        ],
    },
};
