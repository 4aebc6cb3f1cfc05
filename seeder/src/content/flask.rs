use super::{CourseContent, ExerciseDef, LessonDef, OptionDef, QuestionDef, QuizDef};

pub static COURSE: CourseContent = CourseContent {
    slug: "flask",
    title: "Flask práctico",
    description: "Aprende a construir aplicaciones y APIs ligeras con Flask, Jinja2 y SQLAlchemy.",
    lessons: &[
        LessonDef { sort_order: 1, title: "¿Qué es Flask?" },
        LessonDef { sort_order: 2, title: "Rutas y vistas" },
        LessonDef { sort_order: 3, title: "Parámetros de ruta y query string" },
        LessonDef { sort_order: 4, title: "Plantillas con Jinja2" },
        LessonDef { sort_order: 5, title: "Formularios y request" },
        LessonDef { sort_order: 6, title: "Blueprints" },
        LessonDef { sort_order: 7, title: "SQLAlchemy" },
        LessonDef { sort_order: 8, title: "APIs JSON" },
        LessonDef { sort_order: 9, title: "Manejo de errores" },
        LessonDef { sort_order: 10, title: "Pruebas con el cliente de Flask" },
        LessonDef { sort_order: 11, title: "Sesiones y cookies" },
        LessonDef { sort_order: 12, title: "Autenticación con Flask-Login" },
        LessonDef { sort_order: 13, title: "Fábrica de aplicaciones" },
        LessonDef { sort_order: 14, title: "Formularios con Flask-WTF" },
        LessonDef { sort_order: 15, title: "Relaciones en SQLAlchemy" },
        LessonDef { sort_order: 16, title: "Subida de archivos" },
        LessonDef { sort_order: 17, title: "Hooks de petición" },
        LessonDef { sort_order: 18, title: "Autenticación por token" },
        LessonDef { sort_order: 19, title: "Comandos de la CLI" },
        LessonDef { sort_order: 20, title: "Despliegue" },
    ],
    exercises: &[
        ExerciseDef {
            sort_order: 2,
            title: "Tu primera ruta",
            language: "python",
            description: r#"## Tu primera ruta

Crea una aplicación Flask con dos rutas:

- `/` devuelve el texto `¡Hola, Flask!`.
- `/acerca` devuelve el texto `Curso de Flask`.
"#,
            starter_code: r#"from flask import Flask

app = Flask(__name__)
"#,
            solution_code: r#"from flask import Flask

app = Flask(__name__)


@app.route("/")
def inicio():
    return "¡Hola, Flask!"


@app.route("/acerca")
def acerca():
    return "Curso de Flask"
"#,
        },
        ExerciseDef {
            sort_order: 3,
            title: "Saludo personalizado",
            language: "python",
            description: r#"## Saludo personalizado

Implementa la ruta `/saludo/<nombre>`.

- Devuelve `Hola, <nombre>`.
- Si la query string incluye `mayusculas=1`, el saludo completo va en mayúsculas.

Ejemplo: `/saludo/ana?mayusculas=1` → `HOLA, ANA`.
"#,
            starter_code: r#"from flask import Flask, request

app = Flask(__name__)


@app.route("/saludo/<nombre>")
def saludo(nombre):
    pass
"#,
            solution_code: r#"from flask import Flask, request

app = Flask(__name__)


@app.route("/saludo/<nombre>")
def saludo(nombre):
    texto = f"Hola, {nombre}"
    if request.args.get("mayusculas") == "1":
        texto = texto.upper()
    return texto
"#,
        },
        ExerciseDef {
            sort_order: 4,
            title: "Lista de tareas en Jinja2",
            language: "html",
            description: r#"## Lista de tareas

Completa `tareas.html`. La vista envía `tareas`, una lista de diccionarios con
`titulo` y `hecha`.

- Muestra cada tarea en un `<li>`.
- Las tareas hechas llevan la clase CSS `hecha`.
- Muestra el total con el filtro `length`.
"#,
            starter_code: r#"<h1>Tareas</h1>
<ul>
</ul>
"#,
            solution_code: r#"<h1>Tareas ({{ tareas|length }})</h1>
<ul>
  {% for tarea in tareas %}
    <li{% if tarea.hecha %} class="hecha"{% endif %}>{{ tarea.titulo }}</li>
  {% endfor %}
</ul>
"#,
        },
        ExerciseDef {
            sort_order: 5,
            title: "Procesar un formulario",
            language: "python",
            description: r#"## Procesar un formulario

La ruta `/registro` acepta `GET` y `POST`.

- Con `GET` renderiza `registro.html`.
- Con `POST` lee `email` del formulario; si está vacío vuelve a renderizar la plantilla
  con `error="El email es obligatorio"` y código **400**.
- Si es válido redirige a `/gracias`.
"#,
            starter_code: r#"from flask import Flask, redirect, render_template, request

app = Flask(__name__)


@app.route("/registro")
def registro():
    pass
"#,
            solution_code: r#"from flask import Flask, redirect, render_template, request

app = Flask(__name__)


@app.route("/registro", methods=["GET", "POST"])
def registro():
    if request.method == "POST":
        email = request.form.get("email", "").strip()
        if not email:
            return render_template("registro.html", error="El email es obligatorio"), 400
        return redirect("/gracias")
    return render_template("registro.html")
"#,
        },
        ExerciseDef {
            sort_order: 6,
            title: "Blueprint de administración",
            language: "python",
            description: r#"## Blueprint de administración

Mueve las rutas de administración a un blueprint.

- Crea el blueprint `admin` con prefijo `/admin`.
- Añade la ruta `/` que devuelve `Panel de administración`.
- Regístralo en la aplicación dentro de `create_app`.
"#,
            starter_code: r#"from flask import Blueprint, Flask


def create_app():
    app = Flask(__name__)
    return app
"#,
            solution_code: r#"from flask import Blueprint, Flask

admin = Blueprint("admin", __name__, url_prefix="/admin")


@admin.route("/")
def panel():
    return "Panel de administración"


def create_app():
    app = Flask(__name__)
    app.register_blueprint(admin)
    return app
"#,
        },
        ExerciseDef {
            sort_order: 7,
            title: "Modelo con SQLAlchemy",
            language: "python",
            description: r#"## Modelo `Libro`

Con Flask-SQLAlchemy define el modelo `Libro`:

- `id` entero, clave primaria.
- `titulo` cadena de 120 caracteres, obligatoria.
- `autor` cadena de 80 caracteres, obligatoria.
- `paginas` entero, opcional.

Después escribe `libros_largos()` que devuelve los libros con más de 300 páginas.
"#,
            starter_code: r#"from flask_sqlalchemy import SQLAlchemy

db = SQLAlchemy()


class Libro(db.Model):
    pass


def libros_largos():
    pass
"#,
            solution_code: r#"from flask_sqlalchemy import SQLAlchemy

db = SQLAlchemy()


class Libro(db.Model):
    id = db.Column(db.Integer, primary_key=True)
    titulo = db.Column(db.String(120), nullable=False)
    autor = db.Column(db.String(80), nullable=False)
    paginas = db.Column(db.Integer)


def libros_largos():
    return Libro.query.filter(Libro.paginas > 300).all()
"#,
        },
        ExerciseDef {
            sort_order: 8,
            title: "Endpoint JSON",
            language: "python",
            description: r#"## Endpoint JSON

Implementa `POST /api/notas`.

- El cuerpo es JSON con el campo `texto`.
- Si falta `texto` responde `{"error": "texto requerido"}` con código **422**.
- Si es válido agrega la nota a `NOTAS` y responde la nota creada con `id` y código **201**.
"#,
            starter_code: r#"from flask import Flask, jsonify, request

app = Flask(__name__)
NOTAS = []


@app.post("/api/notas")
def crear_nota():
    pass
"#,
            solution_code: r#"from flask import Flask, jsonify, request

app = Flask(__name__)
NOTAS = []


@app.post("/api/notas")
def crear_nota():
    datos = request.get_json(silent=True) or {}
    texto = datos.get("texto")
    if not texto:
        return jsonify({"error": "texto requerido"}), 422
    nota = {"id": len(NOTAS) + 1, "texto": texto}
    NOTAS.append(nota)
    return jsonify(nota), 201
"#,
        },
        ExerciseDef {
            sort_order: 9,
            title: "Página 404 personalizada",
            language: "python",
            description: r#"## Página 404 personalizada

Registra un manejador de errores para el código 404 que renderice `404.html`
y conserve el código de estado **404**.
"#,
            starter_code: r#"from flask import Flask, render_template

app = Flask(__name__)
"#,
            solution_code: r#"from flask import Flask, render_template

app = Flask(__name__)


@app.errorhandler(404)
def no_encontrado(error):
    return render_template("404.html"), 404
"#,
        },
        ExerciseDef {
            sort_order: 10,
            title: "Probar una ruta",
            language: "python",
            description: r#"## Probar una ruta

Escribe una prueba con `pytest` que use `app.test_client()` para comprobar que
`GET /` responde con código 200 y contiene `Hola`.
"#,
            starter_code: r#"from app import app


def test_inicio():
    pass
"#,
            solution_code: r#"from app import app


def test_inicio():
    cliente = app.test_client()
    respuesta = cliente.get("/")
    assert respuesta.status_code == 200
    assert b"Hola" in respuesta.data
"#,
        },
        ExerciseDef {
            sort_order: 11,
            title: "Contador de visitas",
            language: "python",
            description: r#"## Contador de visitas

Crea la ruta `/visitas` que guarde en la sesión cuántas veces la visitó el usuario
y responda `Has visitado esta página N veces`.
"#,
            starter_code: r#"from flask import Flask, session

app = Flask(__name__)
app.secret_key = "desarrollo"


@app.route("/visitas")
def visitas():
    return ""
"#,
            solution_code: r#"from flask import Flask, session

app = Flask(__name__)
app.secret_key = "desarrollo"


@app.route("/visitas")
def visitas():
    session["visitas"] = session.get("visitas", 0) + 1
    return f"Has visitado esta página {session['visitas']} veces"
"#,
        },
        ExerciseDef {
            sort_order: 12,
            title: "Proteger el panel",
            language: "python",
            description: r#"## Proteger el panel

Configura `LoginManager`:

1. Registra un `user_loader` que busque el usuario por id con `db.session.get`.
2. Redirige a la vista `login` cuando falte la sesión.
3. Protege `/panel` con `login_required` y saluda al usuario actual.
"#,
            starter_code: r#"from flask import Flask
from flask_login import LoginManager, current_user, login_required

from .models import Usuario, db

app = Flask(__name__)
login_manager = LoginManager(app)


@app.route("/panel")
def panel():
    return "Panel"
"#,
            solution_code: r#"from flask import Flask
from flask_login import LoginManager, current_user, login_required

from .models import Usuario, db

app = Flask(__name__)
login_manager = LoginManager(app)
login_manager.login_view = "login"


@login_manager.user_loader
def cargar_usuario(usuario_id):
    return db.session.get(Usuario, int(usuario_id))


@app.route("/panel")
@login_required
def panel():
    return f"Hola, {current_user.nombre}"
"#,
        },
        ExerciseDef {
            sort_order: 13,
            title: "create_app",
            language: "python",
            description: r#"## Fábrica de aplicaciones

Escribe `create_app(config=None)`:

- Crea la aplicación y carga `config.Config` por defecto.
- Si se pasa un diccionario `config`, úsalo para sobrescribir valores.
- Inicializa `db` y registra el blueprint `admin`.
"#,
            starter_code: r#"from flask import Flask


def create_app(config=None):
    app = Flask(__name__)
    return app
"#,
            solution_code: r#"from flask import Flask

from .admin import admin
from .models import db


def create_app(config=None):
    app = Flask(__name__)
    app.config.from_object("config.Config")
    if config:
        app.config.update(config)

    db.init_app(app)
    app.register_blueprint(admin)
    return app
"#,
        },
        ExerciseDef {
            sort_order: 14,
            title: "Formulario de registro",
            language: "python",
            description: r#"## Formulario de registro

Define `RegistroForm` con Flask-WTF:

- `email` obligatorio y con formato válido.
- `clave` obligatoria de al menos 8 caracteres.
- `confirmar` que debe coincidir con `clave`.
"#,
            starter_code: r#"from flask_wtf import FlaskForm
from wtforms import EmailField, PasswordField


class RegistroForm(FlaskForm):
    pass
"#,
            solution_code: r#"from flask_wtf import FlaskForm
from wtforms import EmailField, PasswordField
from wtforms.validators import DataRequired, Email, EqualTo, Length


class RegistroForm(FlaskForm):
    email = EmailField("Email", validators=[DataRequired(), Email()])
    clave = PasswordField("Clave", validators=[DataRequired(), Length(min=8)])
    confirmar = PasswordField(
        "Confirmar", validators=[EqualTo("clave", message="Las claves no coinciden")]
    )
"#,
        },
        ExerciseDef {
            sort_order: 15,
            title: "Autores y libros",
            language: "python",
            description: r#"## Autores y libros

Modela una relación uno a muchos:

- `Autor` con `id` y `nombre`.
- `Libro` con `id`, `titulo` y `autor_id` (clave foránea).
- `Autor.libros` debe devolver los libros del autor y `Libro.autor` su autor.
"#,
            starter_code: r#"from flask_sqlalchemy import SQLAlchemy

db = SQLAlchemy()


class Autor(db.Model):
    id = db.Column(db.Integer, primary_key=True)


class Libro(db.Model):
    id = db.Column(db.Integer, primary_key=True)
"#,
            solution_code: r#"from flask_sqlalchemy import SQLAlchemy

db = SQLAlchemy()


class Autor(db.Model):
    id = db.Column(db.Integer, primary_key=True)
    nombre = db.Column(db.String(120), nullable=False)
    libros = db.relationship("Libro", back_populates="autor")


class Libro(db.Model):
    id = db.Column(db.Integer, primary_key=True)
    titulo = db.Column(db.String(200), nullable=False)
    autor_id = db.Column(db.Integer, db.ForeignKey("autor.id"), nullable=False)
    autor = db.relationship("Autor", back_populates="libros")
"#,
        },
        ExerciseDef {
            sort_order: 16,
            title: "Subir un avatar",
            language: "python",
            description: r#"## Subir un avatar

Implementa `POST /avatar`:

- Rechaza con **400** si no llega el archivo `avatar` o su extensión no es `png` o `jpg`.
- Guarda el archivo en `app.config["UPLOAD_FOLDER"]` usando `secure_filename`.
- Responde **201** con el nombre guardado.
"#,
            starter_code: r#"import os

from flask import Flask, request
from werkzeug.utils import secure_filename

app = Flask(__name__)
app.config["UPLOAD_FOLDER"] = "subidas"


@app.post("/avatar")
def subir_avatar():
    return ""
"#,
            solution_code: r#"import os

from flask import Flask, request
from werkzeug.utils import secure_filename

app = Flask(__name__)
app.config["UPLOAD_FOLDER"] = "subidas"
PERMITIDAS = {"png", "jpg"}


def permitido(nombre):
    return "." in nombre and nombre.rsplit(".", 1)[1].lower() in PERMITIDAS


@app.post("/avatar")
def subir_avatar():
    archivo = request.files.get("avatar")
    if archivo is None or not permitido(archivo.filename):
        return {"error": "archivo inválido"}, 400

    nombre = secure_filename(archivo.filename)
    archivo.save(os.path.join(app.config["UPLOAD_FOLDER"], nombre))
    return {"archivo": nombre}, 201
"#,
        },
        ExerciseDef {
            sort_order: 17,
            title: "Medir cada petición",
            language: "python",
            description: r#"## Medir cada petición

Usa `before_request` y `after_request` para guardar el instante de inicio en `g`
y añadir a cada respuesta la cabecera `X-Duracion` con los segundos transcurridos.
"#,
            starter_code: r#"import time

from flask import Flask, g

app = Flask(__name__)
"#,
            solution_code: r#"import time

from flask import Flask, g

app = Flask(__name__)


@app.before_request
def iniciar_reloj():
    g.inicio = time.perf_counter()


@app.after_request
def agregar_duracion(response):
    response.headers["X-Duracion"] = f"{time.perf_counter() - g.inicio:.4f}"
    return response
"#,
        },
        ExerciseDef {
            sort_order: 18,
            title: "Decorador requiere_token",
            language: "python",
            description: r#"## Decorador `requiere_token`

Escribe el decorador `requiere_token` que lea la cabecera `Authorization: Bearer <token>`.
Si falta o el token no coincide con `app.config["API_TOKEN"]`, responde **401** en JSON.
"#,
            starter_code: r#"from functools import wraps

from flask import current_app, request


def requiere_token(vista):
    return vista
"#,
            solution_code: r#"from functools import wraps

from flask import current_app, request


def requiere_token(vista):
    @wraps(vista)
    def envoltura(*args, **kwargs):
        cabecera = request.headers.get("Authorization", "")
        token = cabecera.removeprefix("Bearer ").strip()
        if not token or token != current_app.config["API_TOKEN"]:
            return {"error": "no autorizado"}, 401
        return vista(*args, **kwargs)

    return envoltura
"#,
        },
        ExerciseDef {
            sort_order: 19,
            title: "Comando para sembrar datos",
            language: "python",
            description: r#"## Comando `sembrar`

Registra el comando `flask sembrar` que cree las tablas y agregue tres tareas de ejemplo,
mostrando `Base de datos sembrada` al terminar.
"#,
            starter_code: r#"import click

from .models import Tarea, db


def registrar_comandos(app):
    pass
"#,
            solution_code: r#"import click

from .models import Tarea, db


def registrar_comandos(app):
    @app.cli.command("sembrar")
    def sembrar():
        db.create_all()
        for titulo in ["Leer", "Escribir", "Practicar"]:
            db.session.add(Tarea(titulo=titulo))
        db.session.commit()
        click.echo("Base de datos sembrada")
"#,
        },
        ExerciseDef {
            sort_order: 20,
            title: "Punto de entrada WSGI",
            language: "python",
            description: r#"## Punto de entrada WSGI

Crea `wsgi.py` para Gunicorn: construye la aplicación con `create_app` tomando
`DATABASE_URL` del entorno como `SQLALCHEMY_DATABASE_URI` y exponla como `app`.

Gunicorn se lanzará con `gunicorn wsgi:app`.
"#,
            starter_code: r#"import os

from tareas import create_app
"#,
            solution_code: r#"import os

from tareas import create_app

app = create_app({"SQLALCHEMY_DATABASE_URI": os.environ["DATABASE_URL"]})
"#,
        },
    ],
    quiz: QuizDef {
        title: "Evaluación de Flask",
        description: Some("Preguntas sobre rutas, plantillas y APIs con Flask."),
        questions: &[
            QuestionDef {
                question: "¿Qué decorador asocia una función a una URL?",
                explanation: None,
                options: &[
                    OptionDef { text: "@app.url", correct: false },
                    OptionDef { text: "@app.route", correct: true },
                    OptionDef { text: "@app.view", correct: false },
                    OptionDef { text: "@app.path", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Cómo se lee el parámetro `q` de la query string?",
                explanation: Some("`request.args` contiene los parámetros de la URL; `request.form` los del cuerpo."),
                options: &[
                    OptionDef { text: "request.form['q']", correct: false },
                    OptionDef { text: "request.args.get('q')", correct: true },
                    OptionDef { text: "request.json['q']", correct: false },
                    OptionDef { text: "request.query('q')", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Para qué sirve un Blueprint?",
                explanation: Some("Un blueprint agrupa rutas, plantillas y recursos para registrarlos en la aplicación."),
                options: &[
                    OptionDef { text: "Para definir modelos de base de datos", correct: false },
                    OptionDef { text: "Para organizar rutas en módulos reutilizables", correct: true },
                    OptionDef { text: "Para compilar plantillas", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué motor de plantillas usa Flask por defecto?",
                explanation: None,
                options: &[
                    OptionDef { text: "Mako", correct: false },
                    OptionDef { text: "Django Templates", correct: false },
                    OptionDef { text: "Jinja2", correct: true },
                    OptionDef { text: "Handlebars", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué devuelve una vista para responder JSON con código 201?",
                explanation: Some("Una vista puede devolver una tupla `(respuesta, código)`."),
                options: &[
                    OptionDef { text: "jsonify(datos), 201", correct: true },
                    OptionDef { text: "json(datos, 201)", correct: false },
                    OptionDef { text: "render_template(datos, 201)", correct: false },
                    OptionDef { text: "Response.json(201)", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué objeto permite hacer peticiones a la aplicación en las pruebas?",
                explanation: None,
                options: &[
                    OptionDef { text: "app.test_client()", correct: true },
                    OptionDef { text: "app.run()", correct: false },
                    OptionDef { text: "requests.Session()", correct: false },
                    OptionDef { text: "app.app_context()", correct: false },
                ],
            },
        ],
    },
};
