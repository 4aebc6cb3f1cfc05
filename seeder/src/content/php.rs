use super::{CourseContent, ExerciseDef, LessonDef, OptionDef, QuestionDef, QuizDef};

pub static COURSE: CourseContent = CourseContent {
    slug: "php",
    title: "PHP moderno",
    description: "Fundamentos de PHP 8: tipos, funciones, arreglos, programación orientada a objetos y PDO.",
    lessons: &[
        LessonDef { sort_order: 1, title: "Primeros pasos con PHP" },
        LessonDef { sort_order: 2, title: "Variables y tipos" },
        LessonDef { sort_order: 3, title: "Estructuras de control" },
        LessonDef { sort_order: 4, title: "Funciones" },
        LessonDef { sort_order: 5, title: "Arreglos" },
        LessonDef { sort_order: 6, title: "Cadenas" },
        LessonDef { sort_order: 7, title: "Clases y objetos" },
        LessonDef { sort_order: 8, title: "Interfaces y traits" },
        LessonDef { sort_order: 9, title: "Excepciones" },
        LessonDef { sort_order: 10, title: "Bases de datos con PDO" },
        LessonDef { sort_order: 11, title: "Enumeraciones" },
        LessonDef { sort_order: 12, title: "Namespaces y autoload" },
        LessonDef { sort_order: 13, title: "Closures y funciones flecha" },
        LessonDef { sort_order: 14, title: "Generadores" },
        LessonDef { sort_order: 15, title: "Fechas y horas" },
        LessonDef { sort_order: 16, title: "JSON" },
        LessonDef { sort_order: 17, title: "Lectura de archivos" },
        LessonDef { sort_order: 18, title: "Seguridad en formularios" },
        LessonDef { sort_order: 19, title: "Pruebas con PHPUnit" },
        LessonDef { sort_order: 20, title: "Inyección de dependencias" },
    ],
    exercises: &[
        ExerciseDef {
            sort_order: 2,
            title: "Convertir entradas",
            language: "php",
            description: r#"## Convertir entradas

Con `declare(strict_types=1)` activo, implementa `aEntero(string $texto): ?int`
que devuelva el entero representado por `$texto` (se permiten espacios alrededor)
o `null` si no es un entero válido. Usa `filter_var`.
"#,
            starter_code: r#"<?php

declare(strict_types=1);

function aEntero(string $texto): ?int
{
    return (int) $texto;
}
"#,
            solution_code: r#"<?php

declare(strict_types=1);

function aEntero(string $texto): ?int
{
    $valor = filter_var(trim($texto), FILTER_VALIDATE_INT);

    return $valor === false ? null : $valor;
}
"#,
        },
        ExerciseDef {
            sort_order: 3,
            title: "FizzBuzz",
            language: "php",
            description: r#"## FizzBuzz

Implementa `fizzbuzz(int $n): string`:

- `Fizz` si `$n` es múltiplo de 3.
- `Buzz` si es múltiplo de 5.
- `FizzBuzz` si es múltiplo de ambos.
- En otro caso el número como texto.
"#,
            starter_code: r#"<?php

function fizzbuzz(int $n): string
{
    return '';
}
"#,
            solution_code: r#"<?php

function fizzbuzz(int $n): string
{
    return match (true) {
        $n % 15 === 0 => 'FizzBuzz',
        $n % 3 === 0 => 'Fizz',
        $n % 5 === 0 => 'Buzz',
        default => (string) $n,
    };
}
"#,
        },
        ExerciseDef {
            sort_order: 4,
            title: "Parámetros con valor por defecto",
            language: "php",
            description: r#"## Precio con impuesto

Escribe `precioFinal(float $precio, float $impuesto = 0.16): float` que devuelva
el precio con impuesto redondeado a dos decimales.

Ejemplo: `precioFinal(100)` → `116.0`.
"#,
            starter_code: r#"<?php

function precioFinal(float $precio, float $impuesto = 0.16): float
{
}
"#,
            solution_code: r#"<?php

function precioFinal(float $precio, float $impuesto = 0.16): float
{
    return round($precio * (1 + $impuesto), 2);
}
"#,
        },
        ExerciseDef {
            sort_order: 5,
            title: "Filtrar y transformar arreglos",
            language: "php",
            description: r#"## Filtrar y transformar

Dado un arreglo de productos `['nombre' => string, 'precio' => float]`,
implementa `nombresBaratos(array $productos, float $maximo): array` que devuelva
los nombres de los productos con precio menor o igual a `$maximo`, ordenados alfabéticamente.
"#,
            starter_code: r#"<?php

function nombresBaratos(array $productos, float $maximo): array
{
    return [];
}
"#,
            solution_code: r#"<?php

function nombresBaratos(array $productos, float $maximo): array
{
    $baratos = array_filter($productos, fn (array $p) => $p['precio'] <= $maximo);
    $nombres = array_map(fn (array $p) => $p['nombre'], $baratos);
    sort($nombres);

    return array_values($nombres);
}
"#,
        },
        ExerciseDef {
            sort_order: 6,
            title: "Generar slugs",
            language: "php",
            description: r#"## Generar slugs

Implementa `slug(string $texto): string`:

- Convierte a minúsculas.
- Reemplaza cualquier secuencia de caracteres que no sean letras o números por un guion.
- Elimina guiones al inicio y al final.

Ejemplo: `slug('  Hola, Mundo PHP! ')` → `hola-mundo-php`.
"#,
            starter_code: r#"<?php

function slug(string $texto): string
{
    return $texto;
}
"#,
            solution_code: r#"<?php

function slug(string $texto): string
{
    $texto = strtolower($texto);
    $texto = preg_replace('/[^a-z0-9]+/', '-', $texto);

    return trim($texto, '-');
}
"#,
        },
        ExerciseDef {
            sort_order: 7,
            title: "Cuenta bancaria",
            language: "php",
            description: r#"## Cuenta bancaria

Crea la clase `Cuenta`:

- Constructor con promoción de propiedades: `titular` (string, pública de solo lectura)
  y `saldo` (float, privada, 0 por defecto).
- `depositar(float $monto)` suma al saldo.
- `retirar(float $monto)` resta; si el saldo no alcanza lanza `InvalidArgumentException`.
- `saldo()` devuelve el saldo actual.
"#,
            starter_code: r#"<?php

class Cuenta
{
}
"#,
            solution_code: r#"<?php

class Cuenta
{
    public function __construct(
        public readonly string $titular,
        private float $saldo = 0.0,
    ) {
    }

    public function depositar(float $monto): void
    {
        $this->saldo += $monto;
    }

    public function retirar(float $monto): void
    {
        if ($monto > $this->saldo) {
            throw new InvalidArgumentException('Saldo insuficiente');
        }
        $this->saldo -= $monto;
    }

    public function saldo(): float
    {
        return $this->saldo;
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 8,
            title: "Interfaz de figuras",
            language: "php",
            description: r#"## Interfaz de figuras

Declara la interfaz `Figura` con el método `area(): float` e impleméntala en
`Rectangulo` (base y altura) y `Circulo` (radio).
"#,
            starter_code: r#"<?php

interface Figura
{
}
"#,
            solution_code: r#"<?php

interface Figura
{
    public function area(): float;
}

class Rectangulo implements Figura
{
    public function __construct(private float $base, private float $altura)
    {
    }

    public function area(): float
    {
        return $this->base * $this->altura;
    }
}

class Circulo implements Figura
{
    public function __construct(private float $radio)
    {
    }

    public function area(): float
    {
        return M_PI * $this->radio ** 2;
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 9,
            title: "Capturar excepciones",
            language: "php",
            description: r#"## Capturar excepciones

Implementa `restoSeguro(int $a, int $b): ?int` que devuelva `$a % $b`.
Cuando `$b` es cero PHP lanza `DivisionByZeroError`: captúralo y devuelve `null`.
"#,
            starter_code: r#"<?php

function restoSeguro(int $a, int $b): ?int
{
    return $a % $b;
}
"#,
            solution_code: r#"<?php

function restoSeguro(int $a, int $b): ?int
{
    try {
        return $a % $b;
    } catch (DivisionByZeroError) {
        return null;
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 10,
            title: "Consultas preparadas",
            language: "php",
            description: r#"## Consultas preparadas

Escribe `buscarUsuario(PDO $pdo, string $email): ?array` que consulte la tabla
`usuarios` con una sentencia preparada y devuelva la fila como arreglo asociativo
o `null` si no existe.
"#,
            starter_code: r#"<?php

function buscarUsuario(PDO $pdo, string $email): ?array
{
    return null;
}
"#,
            solution_code: r#"<?php

function buscarUsuario(PDO $pdo, string $email): ?array
{
    $sentencia = $pdo->prepare('SELECT * FROM usuarios WHERE email = :email');
    $sentencia->execute(['email' => $email]);
    $fila = $sentencia->fetch(PDO::FETCH_ASSOC);

    return $fila === false ? null : $fila;
}
"#,
        },
        ExerciseDef {
            sort_order: 11,
            title: "Estado de un pedido",
            language: "php",
            description: r#"## Estado de un pedido

Declara el enum respaldado `Estado: string` con los casos `Pendiente = 'pendiente'`,
`Enviado = 'enviado'` y `Entregado = 'entregado'`, y un método `etiqueta()` que devuelva
el texto para mostrar (`Pendiente`, `En camino`, `Entregado`).
"#,
            starter_code: r#"<?php

enum Estado: string
{
}
"#,
            solution_code: r#"<?php

enum Estado: string
{
    case Pendiente = 'pendiente';
    case Enviado = 'enviado';
    case Entregado = 'entregado';

    public function etiqueta(): string
    {
        return match ($this) {
            self::Pendiente => 'Pendiente',
            self::Enviado => 'En camino',
            self::Entregado => 'Entregado',
        };
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 12,
            title: "Clase con namespace",
            language: "php",
            description: r#"## Clase con namespace

Coloca la clase `Producto` en el namespace `App\Modelos` (archivo `src/Modelos/Producto.php`)
y configura la sección `autoload` de `composer.json` para cargar `App\` desde `src/` con PSR-4.
"#,
            starter_code: r#"<?php

class Producto
{
    public function __construct(public string $nombre)
    {
    }
}

// composer.json
// {
//     "autoload": {}
// }
"#,
            solution_code: r#"<?php

namespace App\Modelos;

class Producto
{
    public function __construct(public string $nombre)
    {
    }
}

// composer.json
// {
//     "autoload": {
//         "psr-4": { "App\\": "src/" }
//     }
// }
"#,
        },
        ExerciseDef {
            sort_order: 13,
            title: "Fábrica de multiplicadores",
            language: "php",
            description: r#"## Fábrica de multiplicadores

Implementa `multiplicador(int $factor): Closure` que devuelva una función flecha que
multiplique su argumento por `$factor`. Después usa `array_map` con `multiplicador(3)`
sobre `[1, 2, 3]`.
"#,
            starter_code: r#"<?php

function multiplicador(int $factor): Closure
{
}
"#,
            solution_code: r#"<?php

function multiplicador(int $factor): Closure
{
    return fn (int $x): int => $x * $factor;
}

$triples = array_map(multiplicador(3), [1, 2, 3]);
"#,
        },
        ExerciseDef {
            sort_order: 14,
            title: "Rango perezoso",
            language: "php",
            description: r#"## Rango perezoso

Escribe el generador `rango(int $inicio, int $fin, int $paso = 1): Generator`
que produzca los valores de `$inicio` a `$fin` inclusive. Lanza `InvalidArgumentException`
si `$paso` no es positivo.
"#,
            starter_code: r#"<?php

function rango(int $inicio, int $fin, int $paso = 1): Generator
{
    yield $inicio;
}
"#,
            solution_code: r#"<?php

function rango(int $inicio, int $fin, int $paso = 1): Generator
{
    if ($paso <= 0) {
        throw new InvalidArgumentException('El paso debe ser positivo');
    }

    for ($i = $inicio; $i <= $fin; $i += $paso) {
        yield $i;
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 15,
            title: "Días hasta una fecha",
            language: "php",
            description: r#"## Días hasta una fecha

Implementa `diasHasta(string $fecha, DateTimeImmutable $hoy): int` que devuelva cuántos
días faltan hasta `$fecha` (formato `Y-m-d`). Si la fecha ya pasó devuelve un número negativo.
"#,
            starter_code: r#"<?php

function diasHasta(string $fecha, DateTimeImmutable $hoy): int
{
    return 0;
}
"#,
            solution_code: r#"<?php

function diasHasta(string $fecha, DateTimeImmutable $hoy): int
{
    $objetivo = DateTimeImmutable::createFromFormat('!Y-m-d', $fecha);
    $diferencia = $hoy->setTime(0, 0)->diff($objetivo);

    return (int) $diferencia->format('%r%a');
}
"#,
        },
        ExerciseDef {
            sort_order: 16,
            title: "Leer configuración JSON",
            language: "php",
            description: r#"## Leer configuración JSON

Implementa `leerConfig(string $json): array` que decodifique el JSON como arreglo
asociativo usando `JSON_THROW_ON_ERROR`. Si el JSON no es válido lanza
`RuntimeException` con el mensaje `Configuración inválida`.
"#,
            starter_code: r#"<?php

function leerConfig(string $json): array
{
    return json_decode($json, true);
}
"#,
            solution_code: r#"<?php

function leerConfig(string $json): array
{
    try {
        return json_decode($json, true, 512, JSON_THROW_ON_ERROR);
    } catch (JsonException $e) {
        throw new RuntimeException('Configuración inválida', 0, $e);
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 17,
            title: "Importar un CSV",
            language: "php",
            description: r#"## Importar un CSV

Implementa `leerCsv(string $ruta): array` que lea un CSV cuya primera fila son los
encabezados y devuelva un arreglo de filas asociativas. Cierra siempre el archivo.
"#,
            starter_code: r#"<?php

function leerCsv(string $ruta): array
{
    return [];
}
"#,
            solution_code: r#"<?php

function leerCsv(string $ruta): array
{
    $archivo = fopen($ruta, 'r');
    if ($archivo === false) {
        throw new RuntimeException("No se pudo abrir {$ruta}");
    }

    try {
        $encabezados = fgetcsv($archivo);
        $filas = [];
        while (($fila = fgetcsv($archivo)) !== false) {
            $filas[] = array_combine($encabezados, $fila);
        }

        return $filas;
    } finally {
        fclose($archivo);
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 18,
            title: "Escapar la salida",
            language: "php",
            description: r#"## Escapar la salida

Implementa `e(string $texto): string` que escape HTML con `htmlspecialchars`
(comillas incluidas, UTF-8) y úsala para mostrar el parámetro `nombre` de `$_GET`
en un saludo, con `invitado` como valor por defecto.
"#,
            starter_code: r#"<?php

function e(string $texto): string
{
    return $texto;
}

echo '<p>Hola, ' . $_GET['nombre'] . '</p>';
"#,
            solution_code: r#"<?php

function e(string $texto): string
{
    return htmlspecialchars($texto, ENT_QUOTES, 'UTF-8');
}

$nombre = $_GET['nombre'] ?? 'invitado';
echo '<p>Hola, ' . e($nombre) . '</p>';
"#,
        },
        ExerciseDef {
            sort_order: 19,
            title: "Probar FizzBuzz",
            language: "php",
            description: r#"## Probar FizzBuzz

Escribe `FizzBuzzTest` con PHPUnit usando un proveedor de datos que cubra
`1`, `3`, `5` y `15`.
"#,
            starter_code: r#"<?php

use PHPUnit\Framework\TestCase;

final class FizzBuzzTest extends TestCase
{
}
"#,
            solution_code: r#"<?php

use PHPUnit\Framework\Attributes\DataProvider;
use PHPUnit\Framework\TestCase;

final class FizzBuzzTest extends TestCase
{
    public static function casos(): array
    {
        return [
            [1, '1'],
            [3, 'Fizz'],
            [5, 'Buzz'],
            [15, 'FizzBuzz'],
        ];
    }

    #[DataProvider('casos')]
    public function testFizzBuzz(int $n, string $esperado): void
    {
        $this->assertSame($esperado, fizzbuzz($n));
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 20,
            title: "Notificador desacoplado",
            language: "php",
            description: r#"## Notificador desacoplado

Define la interfaz `Canal` con `enviar(string $destino, string $mensaje): void`.
`Notificador` debe recibir un `Canal` en el constructor y exponer
`avisar(string $destino, string $mensaje)`, que delega en el canal.
Implementa también `CanalMemoria`, que guarda los envíos en un arreglo para pruebas.
"#,
            starter_code: r#"<?php

class Notificador
{
    public function avisar(string $destino, string $mensaje): void
    {
        mail($destino, 'Aviso', $mensaje);
    }
}
"#,
            solution_code: r#"<?php

interface Canal
{
    public function enviar(string $destino, string $mensaje): void;
}

final class Notificador
{
    public function __construct(private Canal $canal)
    {
    }

    public function avisar(string $destino, string $mensaje): void
    {
        $this->canal->enviar($destino, $mensaje);
    }
}

final class CanalMemoria implements Canal
{
    public array $enviados = [];

    public function enviar(string $destino, string $mensaje): void
    {
        $this->enviados[] = [$destino, $mensaje];
    }
}
"#,
        },
    ],
    quiz: QuizDef {
        title: "Evaluación de PHP",
        description: Some("Tipos, arreglos, clases y PDO."),
        questions: &[
            QuestionDef {
                question: "¿Qué operador compara valor y tipo en PHP?",
                explanation: Some("`===` no realiza conversión de tipos; `==` sí."),
                options: &[
                    OptionDef { text: "==", correct: false },
                    OptionDef { text: "===", correct: true },
                    OptionDef { text: "=", correct: false },
                    OptionDef { text: "<=>", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué función aplica una función a cada elemento de un arreglo y devuelve uno nuevo?",
                explanation: None,
                options: &[
                    OptionDef { text: "array_filter", correct: false },
                    OptionDef { text: "array_walk", correct: false },
                    OptionDef { text: "array_map", correct: true },
                    OptionDef { text: "array_reduce", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué evita una sentencia preparada de PDO?",
                explanation: Some("Los parámetros se envían separados de la consulta, lo que impide la inyección SQL."),
                options: &[
                    OptionDef { text: "Inyección SQL", correct: true },
                    OptionDef { text: "Errores de sintaxis en PHP", correct: false },
                    OptionDef { text: "Bloqueos de tabla", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué palabra clave permite que una clase reutilice métodos de un trait?",
                explanation: None,
                options: &[
                    OptionDef { text: "extends", correct: false },
                    OptionDef { text: "implements", correct: false },
                    OptionDef { text: "use", correct: true },
                    OptionDef { text: "include", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué hace el modificador `readonly` en una propiedad?",
                explanation: None,
                options: &[
                    OptionDef { text: "La hace privada", correct: false },
                    OptionDef { text: "Solo puede asignarse una vez", correct: true },
                    OptionDef { text: "La convierte en constante de clase", correct: false },
                    OptionDef { text: "La oculta al serializar", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué expresión introducida en PHP 8 devuelve un valor según coincidencia estricta?",
                explanation: Some("`match` compara con `===` y, a diferencia de `switch`, es una expresión."),
                options: &[
                    OptionDef { text: "switch", correct: false },
                    OptionDef { text: "match", correct: true },
                    OptionDef { text: "case", correct: false },
                    OptionDef { text: "select", correct: false },
                ],
            },
        ],
    },
};
