use super::{CourseContent, ExerciseDef, LessonDef, OptionDef, QuestionDef, QuizDef};

pub static COURSE: CourseContent = CourseContent {
    slug: "laravel",
    title: "Laravel para desarrolladores PHP",
    description: "Rutas, controladores, Eloquent, Blade, validación y APIs con el framework Laravel.",
    lessons: &[
        LessonDef { sort_order: 1, title: "Instalación y estructura" },
        LessonDef { sort_order: 2, title: "Rutas" },
        LessonDef { sort_order: 3, title: "Controladores" },
        LessonDef { sort_order: 4, title: "Vistas con Blade" },
        LessonDef { sort_order: 5, title: "Migraciones" },
        LessonDef { sort_order: 6, title: "Modelos Eloquent" },
        LessonDef { sort_order: 7, title: "Relaciones" },
        LessonDef { sort_order: 8, title: "Validación" },
        LessonDef { sort_order: 9, title: "Middleware" },
        LessonDef { sort_order: 10, title: "API Resources" },
        LessonDef { sort_order: 11, title: "Seeders y factories" },
        LessonDef { sort_order: 12, title: "Autenticación" },
        LessonDef { sort_order: 13, title: "Autorización con policies" },
        LessonDef { sort_order: 14, title: "Colas y jobs" },
        LessonDef { sort_order: 15, title: "Eventos y listeners" },
        LessonDef { sort_order: 16, title: "Envío de correo" },
        LessonDef { sort_order: 17, title: "Almacenamiento de archivos" },
        LessonDef { sort_order: 18, title: "Pruebas de funcionalidades" },
        LessonDef { sort_order: 19, title: "Caché" },
        LessonDef { sort_order: 20, title: "Programación de tareas" },
    ],
    exercises: &[
        ExerciseDef {
            sort_order: 2,
            title: "Rutas con parámetros",
            language: "php",
            description: r#"## Rutas con parámetros

En `routes/web.php` define:

- `GET /` que devuelve la vista `inicio`.
- `GET /usuarios/{id}` que devuelve el texto `Usuario {id}`; `id` debe ser numérico.
- Nombra la segunda ruta `usuarios.mostrar`.
"#,
            starter_code: r#"<?php

use Illuminate\Support\Facades\Route;
"#,
            solution_code: r#"<?php

use Illuminate\Support\Facades\Route;

Route::get('/', function () {
    return view('inicio');
});

Route::get('/usuarios/{id}', function (int $id) {
    return "Usuario {$id}";
})->whereNumber('id')->name('usuarios.mostrar');
"#,
        },
        ExerciseDef {
            sort_order: 3,
            title: "Controlador de recursos",
            language: "php",
            description: r#"## Controlador de recursos

Completa `ProductoController`:

- `index` devuelve la vista `productos.index` con todos los productos.
- `show` recibe un `Producto` mediante *route model binding* y devuelve la vista `productos.show`.

Registra las rutas con `Route::resource` limitado a `index` y `show`.
"#,
            starter_code: r#"<?php

namespace App\Http\Controllers;

use App\Models\Producto;

class ProductoController extends Controller
{
}
"#,
            solution_code: r#"<?php

namespace App\Http\Controllers;

use App\Models\Producto;

class ProductoController extends Controller
{
    public function index()
    {
        return view('productos.index', ['productos' => Producto::all()]);
    }

    public function show(Producto $producto)
    {
        return view('productos.show', compact('producto'));
    }
}

// routes/web.php
// Route::resource('productos', ProductoController::class)->only(['index', 'show']);
"#,
        },
        ExerciseDef {
            sort_order: 4,
            title: "Componentes Blade",
            language: "blade",
            description: r#"## Listado en Blade

Completa `productos/index.blade.php`:

- Extiende el layout `layouts.app` y rellena la sección `contenido`.
- Recorre `$productos` con `@forelse` mostrando nombre y precio con dos decimales.
- Si no hay productos muestra *Sin productos*.
"#,
            starter_code: r#"{{-- productos/index.blade.php --}}
"#,
            solution_code: r#"@extends('layouts.app')

@section('contenido')
    <ul>
        @forelse ($productos as $producto)
            <li>{{ $producto->nombre }} - {{ number_format($producto->precio, 2) }}</li>
        @empty
            <li>Sin productos</li>
        @endforelse
    </ul>
@endsection
"#,
        },
        ExerciseDef {
            sort_order: 5,
            title: "Migración de productos",
            language: "php",
            description: r#"## Migración de productos

Crea la tabla `productos` con:

- `id` autoincremental.
- `nombre` cadena, única.
- `precio` decimal de 8 dígitos con 2 decimales.
- `stock` entero sin signo, 0 por defecto.
- Marcas de tiempo.

El método `down` debe eliminar la tabla.
"#,
            starter_code: r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    public function up(): void
    {
    }

    public function down(): void
    {
    }
};
"#,
            solution_code: r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    public function up(): void
    {
        Schema::create('productos', function (Blueprint $table) {
            $table->id();
            $table->string('nombre')->unique();
            $table->decimal('precio', 8, 2);
            $table->unsignedInteger('stock')->default(0);
            $table->timestamps();
        });
    }

    public function down(): void
    {
        Schema::dropIfExists('productos');
    }
};
"#,
        },
        ExerciseDef {
            sort_order: 6,
            title: "Scopes en Eloquent",
            language: "php",
            description: r#"## Scopes en Eloquent

En el modelo `Producto`:

- Declara `nombre`, `precio` y `stock` como asignables en masa.
- Crea el scope local `disponibles` que filtra `stock > 0`.
- Convierte `precio` a `decimal:2` mediante `casts`.
"#,
            starter_code: r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Model;

class Producto extends Model
{
}
"#,
            solution_code: r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Builder;
use Illuminate\Database\Eloquent\Model;

class Producto extends Model
{
    protected $fillable = ['nombre', 'precio', 'stock'];

    protected $casts = [
        'precio' => 'decimal:2',
    ];

    public function scopeDisponibles(Builder $query): Builder
    {
        return $query->where('stock', '>', 0);
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 7,
            title: "Relación uno a muchos",
            language: "php",
            description: r#"## Categorías y productos

Una `Categoria` tiene muchos `Producto` y cada producto pertenece a una categoría
mediante `categoria_id`.

Define ambos lados de la relación.
"#,
            starter_code: r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Model;

class Categoria extends Model
{
}

class Producto extends Model
{
}
"#,
            solution_code: r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Model;
use Illuminate\Database\Eloquent\Relations\BelongsTo;
use Illuminate\Database\Eloquent\Relations\HasMany;

class Categoria extends Model
{
    public function productos(): HasMany
    {
        return $this->hasMany(Producto::class);
    }
}

class Producto extends Model
{
    public function categoria(): BelongsTo
    {
        return $this->belongsTo(Categoria::class);
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 8,
            title: "Form Request",
            language: "php",
            description: r#"## Validación con Form Request

Crea `GuardarProductoRequest`:

- Autoriza siempre la petición.
- `nombre`: obligatorio, máximo 100 caracteres, único en `productos`.
- `precio`: obligatorio, numérico, mínimo 0.
- `stock`: opcional, entero, mínimo 0.
"#,
            starter_code: r#"<?php

namespace App\Http\Requests;

use Illuminate\Foundation\Http\FormRequest;

class GuardarProductoRequest extends FormRequest
{
}
"#,
            solution_code: r#"<?php

namespace App\Http\Requests;

use Illuminate\Foundation\Http\FormRequest;

class GuardarProductoRequest extends FormRequest
{
    public function authorize(): bool
    {
        return true;
    }

    public function rules(): array
    {
        return [
            'nombre' => ['required', 'max:100', 'unique:productos,nombre'],
            'precio' => ['required', 'numeric', 'min:0'],
            'stock' => ['nullable', 'integer', 'min:0'],
        ];
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 9,
            title: "Middleware de administrador",
            language: "php",
            description: r#"## Middleware de administrador

Escribe `SoloAdmin`: si el usuario autenticado no tiene `es_admin` en verdadero,
aborta con **403**; en otro caso continúa la petición.
"#,
            starter_code: r#"<?php

namespace App\Http\Middleware;

use Closure;
use Illuminate\Http\Request;

class SoloAdmin
{
    public function handle(Request $request, Closure $next)
    {
    }
}
"#,
            solution_code: r#"<?php

namespace App\Http\Middleware;

use Closure;
use Illuminate\Http\Request;

class SoloAdmin
{
    public function handle(Request $request, Closure $next)
    {
        if (! $request->user()?->es_admin) {
            abort(403);
        }

        return $next($request);
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 10,
            title: "API Resource",
            language: "php",
            description: r#"## API Resource

Crea `ProductoResource` que exponga `id`, `nombre`, `precio` (como número)
y `disponible` (verdadero cuando `stock > 0`).
"#,
            starter_code: r#"<?php

namespace App\Http\Resources;

use Illuminate\Http\Resources\Json\JsonResource;

class ProductoResource extends JsonResource
{
}
"#,
            solution_code: r#"<?php

namespace App\Http\Resources;

use Illuminate\Http\Request;
use Illuminate\Http\Resources\Json\JsonResource;

class ProductoResource extends JsonResource
{
    public function toArray(Request $request): array
    {
        return [
            'id' => $this->id,
            'nombre' => $this->nombre,
            'precio' => (float) $this->precio,
            'disponible' => $this->stock > 0,
        ];
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 11,
            title: "Seeder idempotente",
            language: "php",
            description: r#"## Seeder idempotente

Escribe `CategoriaSeeder` para que ejecutarlo varias veces no duplique filas:
usa `updateOrInsert` con la clave `slug` para las categorías `libros` y `musica`.
"#,
            starter_code: r#"<?php

namespace Database\Seeders;

use Illuminate\Database\Seeder;
use Illuminate\Support\Facades\DB;

class CategoriaSeeder extends Seeder
{
    public function run(): void
    {
    }
}
"#,
            solution_code: r#"<?php

namespace Database\Seeders;

use Illuminate\Database\Seeder;
use Illuminate\Support\Facades\DB;

class CategoriaSeeder extends Seeder
{
    public function run(): void
    {
        foreach (['libros' => 'Libros', 'musica' => 'Música'] as $slug => $nombre) {
            DB::table('categorias')->updateOrInsert(
                ['slug' => $slug],
                ['nombre' => $nombre, 'updated_at' => now(), 'created_at' => now()]
            );
        }
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 12,
            title: "Rutas solo para usuarios autenticados",
            language: "php",
            description: r#"## Rutas autenticadas

Agrupa las rutas `GET /perfil` y `PUT /perfil` bajo el middleware `auth`.
La acción `show` de `PerfilController` debe devolver la vista `perfil.show`
con el usuario autenticado en la variable `usuario`.
"#,
            starter_code: r#"<?php

use App\Http\Controllers\PerfilController;
use Illuminate\Support\Facades\Route;

Route::get('/perfil', [PerfilController::class, 'show']);
Route::put('/perfil', [PerfilController::class, 'update']);
"#,
            solution_code: r#"<?php

use App\Http\Controllers\PerfilController;
use Illuminate\Support\Facades\Route;

Route::middleware('auth')->group(function () {
    Route::get('/perfil', [PerfilController::class, 'show'])->name('perfil.show');
    Route::put('/perfil', [PerfilController::class, 'update'])->name('perfil.update');
});

// app/Http/Controllers/PerfilController.php
// public function show(Request $request)
// {
//     return view('perfil.show', ['usuario' => $request->user()]);
// }
"#,
        },
        ExerciseDef {
            sort_order: 13,
            title: "Policy de publicaciones",
            language: "php",
            description: r#"## Policy de publicaciones

Implementa `PostPolicy`:

- `update`: solo el autor (`user_id`) puede editar.
- `delete`: el autor o un usuario con `is_admin` verdadero.
"#,
            starter_code: r#"<?php

namespace App\Policies;

use App\Models\Post;
use App\Models\User;

class PostPolicy
{
}
"#,
            solution_code: r#"<?php

namespace App\Policies;

use App\Models\Post;
use App\Models\User;

class PostPolicy
{
    public function update(User $user, Post $post): bool
    {
        return $user->id === $post->user_id;
    }

    public function delete(User $user, Post $post): bool
    {
        return $user->is_admin || $user->id === $post->user_id;
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 14,
            title: "Job para generar miniaturas",
            language: "php",
            description: r#"## Job en cola

Completa el job `GenerarMiniatura`:

- Recibe el `Producto` en el constructor.
- En `handle` genera la miniatura con el servicio `Miniaturas` (inyectado) y guarda
  la ruta en `miniatura`.
- Reintenta como máximo 3 veces.
"#,
            starter_code: r#"<?php

namespace App\Jobs;

use App\Models\Producto;
use App\Services\Miniaturas;
use Illuminate\Contracts\Queue\ShouldQueue;
use Illuminate\Foundation\Queue\Queueable;

class GenerarMiniatura implements ShouldQueue
{
    use Queueable;

    public function handle(): void
    {
    }
}
"#,
            solution_code: r#"<?php

namespace App\Jobs;

use App\Models\Producto;
use App\Services\Miniaturas;
use Illuminate\Contracts\Queue\ShouldQueue;
use Illuminate\Foundation\Queue\Queueable;

class GenerarMiniatura implements ShouldQueue
{
    use Queueable;

    public int $tries = 3;

    public function __construct(public Producto $producto)
    {
    }

    public function handle(Miniaturas $miniaturas): void
    {
        $ruta = $miniaturas->generar($this->producto->imagen, 200, 200);
        $this->producto->update(['miniatura' => $ruta]);
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 15,
            title: "Evento de pedido creado",
            language: "php",
            description: r#"## Evento y listener

1. Crea el evento `PedidoCreado` que transporte el `Pedido`.
2. Crea el listener `DescontarInventario` que, al recibir el evento, reste la cantidad
   de cada línea del pedido al stock de su producto.
"#,
            starter_code: r#"<?php

namespace App\Events;

use App\Models\Pedido;

class PedidoCreado
{
}
"#,
            solution_code: r#"<?php

namespace App\Events;

use App\Models\Pedido;
use Illuminate\Foundation\Events\Dispatchable;
use Illuminate\Queue\SerializesModels;

class PedidoCreado
{
    use Dispatchable, SerializesModels;

    public function __construct(public Pedido $pedido)
    {
    }
}

// app/Listeners/DescontarInventario.php
namespace App\Listeners;

use App\Events\PedidoCreado;

class DescontarInventario
{
    public function handle(PedidoCreado $evento): void
    {
        foreach ($evento->pedido->lineas as $linea) {
            $linea->producto->decrement('stock', $linea->cantidad);
        }
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 16,
            title: "Correo de bienvenida",
            language: "php",
            description: r#"## Correo de bienvenida

Completa el Mailable `Bienvenida`:

- Asunto: `Bienvenido a la plataforma`.
- Vista Markdown `emails.bienvenida` con el usuario disponible como `usuario`.

Luego envíalo con `Mail::to($usuario)->send(...)`.
"#,
            starter_code: r#"<?php

namespace App\Mail;

use App\Models\User;
use Illuminate\Mail\Mailable;
use Illuminate\Mail\Mailables\Content;
use Illuminate\Mail\Mailables\Envelope;

class Bienvenida extends Mailable
{
}
"#,
            solution_code: r#"<?php

namespace App\Mail;

use App\Models\User;
use Illuminate\Mail\Mailable;
use Illuminate\Mail\Mailables\Content;
use Illuminate\Mail\Mailables\Envelope;

class Bienvenida extends Mailable
{
    public function __construct(public User $usuario)
    {
    }

    public function envelope(): Envelope
    {
        return new Envelope(subject: 'Bienvenido a la plataforma');
    }

    public function content(): Content
    {
        return new Content(
            markdown: 'emails.bienvenida',
            with: ['usuario' => $this->usuario],
        );
    }
}

// Mail::to($usuario)->send(new Bienvenida($usuario));
"#,
        },
        ExerciseDef {
            sort_order: 17,
            title: "Guardar una factura",
            language: "php",
            description: r#"## Guardar una factura

En `FacturaController@store`:

- Valida que `archivo` sea un PDF de máximo 2 MB.
- Guárdalo en el disco `local` dentro de `facturas`.
- Crea la `Factura` con la ruta guardada y redirige atrás con el mensaje `Factura subida`.
"#,
            starter_code: r#"<?php

namespace App\Http\Controllers;

use App\Models\Factura;
use Illuminate\Http\Request;

class FacturaController extends Controller
{
    public function store(Request $request)
    {
    }
}
"#,
            solution_code: r#"<?php

namespace App\Http\Controllers;

use App\Models\Factura;
use Illuminate\Http\Request;

class FacturaController extends Controller
{
    public function store(Request $request)
    {
        $request->validate([
            'archivo' => ['required', 'file', 'mimes:pdf', 'max:2048'],
        ]);

        $ruta = $request->file('archivo')->store('facturas', 'local');

        Factura::create(['ruta' => $ruta]);

        return back()->with('status', 'Factura subida');
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 18,
            title: "Prueba de creación de productos",
            language: "php",
            description: r#"## Prueba de funcionalidad

Escribe una prueba con `RefreshDatabase` que:

1. Autentique a un usuario creado con su factory.
2. Envíe `POST /productos` con nombre y precio válidos.
3. Compruebe la redirección y que el producto exista en la base de datos.
"#,
            starter_code: r#"<?php

namespace Tests\Feature;

use Tests\TestCase;

class CrearProductoTest extends TestCase
{
}
"#,
            solution_code: r#"<?php

namespace Tests\Feature;

use App\Models\User;
use Illuminate\Foundation\Testing\RefreshDatabase;
use Tests\TestCase;

class CrearProductoTest extends TestCase
{
    use RefreshDatabase;

    public function test_un_usuario_crea_un_producto(): void
    {
        $usuario = User::factory()->create();

        $respuesta = $this->actingAs($usuario)->post('/productos', [
            'nombre' => 'Teclado',
            'precio' => 49.9,
        ]);

        $respuesta->assertRedirect();
        $this->assertDatabaseHas('productos', ['nombre' => 'Teclado']);
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 19,
            title: "Cachear categorías",
            language: "php",
            description: r#"## Cachear categorías

Implementa `CategoriaRepository::todas()` que devuelva las categorías ordenadas por nombre
guardándolas en caché una hora con la clave `categorias`, y `limpiar()` que olvide esa clave.
"#,
            starter_code: r#"<?php

namespace App\Repositories;

use App\Models\Categoria;
use Illuminate\Support\Facades\Cache;

class CategoriaRepository
{
    public function todas()
    {
        return Categoria::orderBy('nombre')->get();
    }
}
"#,
            solution_code: r#"<?php

namespace App\Repositories;

use App\Models\Categoria;
use Illuminate\Support\Facades\Cache;

class CategoriaRepository
{
    public function todas()
    {
        return Cache::remember('categorias', now()->addHour(), function () {
            return Categoria::orderBy('nombre')->get();
        });
    }

    public function limpiar(): void
    {
        Cache::forget('categorias');
    }
}
"#,
        },
        ExerciseDef {
            sort_order: 20,
            title: "Tarea programada",
            language: "php",
            description: r#"## Tarea programada

En `routes/console.php` programa:

- El comando `pedidos:cancelar-vencidos` cada hora, sin solaparse.
- La limpieza de tokens `sanctum:prune-expired --hours=24` todos los días a las 03:00.
"#,
            starter_code: r#"<?php

use Illuminate\Support\Facades\Schedule;
"#,
            solution_code: r#"<?php

use Illuminate\Support\Facades\Schedule;

Schedule::command('pedidos:cancelar-vencidos')->hourly()->withoutOverlapping();

Schedule::command('sanctum:prune-expired --hours=24')->dailyAt('03:00');
"#,
        },
    ],
    quiz: QuizDef {
        title: "Evaluación de Laravel",
        description: Some("Rutas, Eloquent, Blade y validación."),
        questions: &[
            QuestionDef {
                question: "¿Qué comando de Artisan ejecuta las migraciones pendientes?",
                explanation: None,
                options: &[
                    OptionDef { text: "php artisan migrate", correct: true },
                    OptionDef { text: "php artisan db:seed", correct: false },
                    OptionDef { text: "php artisan make:migration", correct: false },
                    OptionDef { text: "php artisan serve", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué propiedad de un modelo define los campos asignables en masa?",
                explanation: Some("`$fillable` es la lista blanca; `$guarded` es la lista negra."),
                options: &[
                    OptionDef { text: "$casts", correct: false },
                    OptionDef { text: "$fillable", correct: true },
                    OptionDef { text: "$hidden", correct: false },
                    OptionDef { text: "$table", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué directiva de Blade recorre una colección y maneja el caso vacío?",
                explanation: None,
                options: &[
                    OptionDef { text: "@foreach", correct: false },
                    OptionDef { text: "@forelse", correct: true },
                    OptionDef { text: "@each", correct: false },
                    OptionDef { text: "@while", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué método define una relación uno a muchos desde el lado «uno»?",
                explanation: None,
                options: &[
                    OptionDef { text: "belongsTo", correct: false },
                    OptionDef { text: "hasOne", correct: false },
                    OptionDef { text: "hasMany", correct: true },
                    OptionDef { text: "belongsToMany", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué hace `updateOrInsert` si ya existe una fila con los atributos de búsqueda?",
                explanation: Some("Actualiza la fila existente; solo inserta cuando no hay coincidencia."),
                options: &[
                    OptionDef { text: "Inserta una fila duplicada", correct: false },
                    OptionDef { text: "Lanza una excepción", correct: false },
                    OptionDef { text: "Actualiza la fila existente", correct: true },
                    OptionDef { text: "No hace nada", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué código HTTP devuelve `abort(403)`?",
                explanation: None,
                options: &[
                    OptionDef { text: "401 No autorizado", correct: false },
                    OptionDef { text: "403 Prohibido", correct: true },
                    OptionDef { text: "404 No encontrado", correct: false },
                ],
            },
        ],
    },
};
