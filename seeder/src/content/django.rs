use super::{CourseContent, ExerciseDef, LessonDef, OptionDef, QuestionDef, QuizDef};

pub static COURSE: CourseContent = CourseContent {
    slug: "django",
    title: "Django desde cero",
    description: "Construye aplicaciones web completas con Python y Django: modelos, vistas, plantillas, formularios y APIs.",
    lessons: &[
        LessonDef { sort_order: 1, title: "Introducción a Django" },
        LessonDef { sort_order: 2, title: "Proyectos y aplicaciones" },
        LessonDef { sort_order: 3, title: "Modelos y migraciones" },
        LessonDef { sort_order: 4, title: "El ORM de Django" },
        LessonDef { sort_order: 5, title: "Vistas basadas en funciones" },
        LessonDef { sort_order: 6, title: "Plantillas" },
        LessonDef { sort_order: 7, title: "Formularios" },
        LessonDef { sort_order: 8, title: "Vistas basadas en clases" },
        LessonDef { sort_order: 9, title: "Autenticación" },
        LessonDef { sort_order: 10, title: "APIs con Django REST Framework" },
        LessonDef { sort_order: 11, title: "El panel de administración" },
        LessonDef { sort_order: 12, title: "Relaciones entre modelos" },
        LessonDef { sort_order: 13, title: "Señales" },
        LessonDef { sort_order: 14, title: "Middleware" },
        LessonDef { sort_order: 15, title: "Archivos subidos" },
        LessonDef { sort_order: 16, title: "Pruebas automatizadas" },
        LessonDef { sort_order: 17, title: "Caché" },
        LessonDef { sort_order: 18, title: "Comandos de gestión" },
        LessonDef { sort_order: 19, title: "Agregaciones y anotaciones" },
        LessonDef { sort_order: 20, title: "Configuración para producción" },
    ],
    exercises: &[
        ExerciseDef {
            sort_order: 2,
            title: "Registrar una aplicación",
            language: "python",
            description: r#"## Registrar una aplicación

Acabas de crear la aplicación `blog` con `python manage.py startapp blog`.
Django no la cargará hasta que la agregues a la configuración del proyecto.

### Tareas
1. Añade `blog` a la lista `INSTALLED_APPS`.
2. Cambia el idioma del proyecto a español (`es`).
3. Cambia la zona horaria a `America/Mexico_City`.
"#,
            starter_code: r#"INSTALLED_APPS = [
    "django.contrib.admin",
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.messages",
    "django.contrib.staticfiles",
]

LANGUAGE_CODE = "en-us"
TIME_ZONE = "UTC"
"#,
            solution_code: r#"INSTALLED_APPS = [
    "django.contrib.admin",
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.messages",
    "django.contrib.staticfiles",
    "blog",
]

LANGUAGE_CODE = "es"
TIME_ZONE = "America/Mexico_City"
"#,
        },
        ExerciseDef {
            sort_order: 3,
            title: "Modelo de artículo",
            language: "python",
            description: r#"## Modelo `Articulo`

Define el modelo que almacenará los artículos del blog.

### Requisitos
- `titulo`: texto de máximo 200 caracteres.
- `slug`: único, máximo 200 caracteres.
- `contenido`: texto libre.
- `publicado`: booleano, `False` por defecto.
- `creado`: fecha y hora que se asigna automáticamente al crear.
- El método `__str__` debe devolver el título.
- Ordena los artículos del más reciente al más antiguo.
"#,
            starter_code: r#"from django.db import models


class Articulo(models.Model):
    # Define aquí los campos
    pass
"#,
            solution_code: r#"from django.db import models


class Articulo(models.Model):
    titulo = models.CharField(max_length=200)
    slug = models.SlugField(max_length=200, unique=True)
    contenido = models.TextField()
    publicado = models.BooleanField(default=False)
    creado = models.DateTimeField(auto_now_add=True)

    class Meta:
        ordering = ["-creado"]

    def __str__(self):
        return self.titulo
"#,
        },
        ExerciseDef {
            sort_order: 4,
            title: "Consultas con el ORM",
            language: "python",
            description: r#"## Consultas con el ORM

Completa las funciones usando el ORM de Django sobre el modelo `Articulo`.

- `publicados()` devuelve solo los artículos publicados.
- `buscar(texto)` devuelve los artículos cuyo título contiene `texto`, sin distinguir mayúsculas.
- `ultimos(n)` devuelve los `n` artículos publicados más recientes.
- `total_borradores()` devuelve cuántos artículos no están publicados.
"#,
            starter_code: r#"from blog.models import Articulo


def publicados():
    pass


def buscar(texto):
    pass


def ultimos(n):
    pass


def total_borradores():
    pass
"#,
            solution_code: r#"from blog.models import Articulo


def publicados():
    return Articulo.objects.filter(publicado=True)


def buscar(texto):
    return Articulo.objects.filter(titulo__icontains=texto)


def ultimos(n):
    return publicados().order_by("-creado")[:n]


def total_borradores():
    return Articulo.objects.filter(publicado=False).count()
"#,
        },
        ExerciseDef {
            sort_order: 5,
            title: "Vista de detalle",
            language: "python",
            description: r#"## Vista de detalle

Escribe la vista `detalle_articulo` que recibe un `slug`.

- Si el artículo no existe o no está publicado responde con **404** usando `get_object_or_404`.
- Renderiza la plantilla `blog/detalle.html` con el artículo en el contexto bajo la clave `articulo`.
- Registra la ruta `articulos/<slug:slug>/` con el nombre `detalle`.
"#,
            starter_code: r#"from django.shortcuts import get_object_or_404, render
from django.urls import path

from .models import Articulo


def detalle_articulo(request, slug):
    pass


urlpatterns = [
]
"#,
            solution_code: r#"from django.shortcuts import get_object_or_404, render
from django.urls import path

from .models import Articulo


def detalle_articulo(request, slug):
    articulo = get_object_or_404(Articulo, slug=slug, publicado=True)
    return render(request, "blog/detalle.html", {"articulo": articulo})


urlpatterns = [
    path("articulos/<slug:slug>/", detalle_articulo, name="detalle"),
]
"#,
        },
        ExerciseDef {
            sort_order: 6,
            title: "Herencia de plantillas",
            language: "html",
            description: r#"## Herencia de plantillas

La plantilla `base.html` define un bloque `contenido`. Crea `blog/lista.html` que:

1. Extienda de `base.html`.
2. Muestre cada artículo de `articulos` dentro de una lista `<ul>`.
3. Enlace cada título a su detalle con la etiqueta `{% url %}` y el nombre `detalle`.
4. Muestre el texto *No hay artículos todavía.* cuando la lista esté vacía.
"#,
            starter_code: r#"{# blog/lista.html #}
"#,
            solution_code: r#"{% extends "base.html" %}

{% block contenido %}
<ul>
  {% for articulo in articulos %}
    <li><a href="{% url 'detalle' articulo.slug %}">{{ articulo.titulo }}</a></li>
  {% empty %}
    <li>No hay artículos todavía.</li>
  {% endfor %}
</ul>
{% endblock %}
"#,
        },
        ExerciseDef {
            sort_order: 7,
            title: "Formulario de contacto",
            language: "python",
            description: r#"## Formulario de contacto

Crea `ContactoForm` con los campos `nombre`, `email` y `mensaje`.

- `mensaje` debe tener al menos 20 caracteres.
- Implementa `clean_email` para rechazar direcciones del dominio `ejemplo.com`
  con el error *No se aceptan correos de ejemplo.com*.
"#,
            starter_code: r#"from django import forms


class ContactoForm(forms.Form):
    pass
"#,
            solution_code: r#"from django import forms


class ContactoForm(forms.Form):
    nombre = forms.CharField(max_length=100)
    email = forms.EmailField()
    mensaje = forms.CharField(widget=forms.Textarea, min_length=20)

    def clean_email(self):
        email = self.cleaned_data["email"]
        if email.lower().endswith("@ejemplo.com"):
            raise forms.ValidationError("No se aceptan correos de ejemplo.com")
        return email
"#,
        },
        ExerciseDef {
            sort_order: 8,
            title: "ListView paginada",
            language: "python",
            description: r#"## ListView paginada

Reemplaza la vista de lista por una vista basada en clases.

- Hereda de `ListView`.
- Muestra solo artículos publicados.
- Usa la plantilla `blog/lista.html` y el nombre de contexto `articulos`.
- Pagina de 5 en 5.
"#,
            starter_code: r#"from django.views.generic import ListView

from .models import Articulo


class ListaArticulos:
    pass
"#,
            solution_code: r#"from django.views.generic import ListView

from .models import Articulo


class ListaArticulos(ListView):
    template_name = "blog/lista.html"
    context_object_name = "articulos"
    paginate_by = 5

    def get_queryset(self):
        return Articulo.objects.filter(publicado=True)
"#,
        },
        ExerciseDef {
            sort_order: 9,
            title: "Proteger una vista",
            language: "python",
            description: r#"## Proteger una vista

La vista `panel` solo debe estar disponible para usuarios autenticados.

- Usa el decorador `login_required` con `login_url="/entrar/"`.
- Muestra en la plantilla `panel.html` los artículos cuyo autor es el usuario actual
  (campo `autor` del modelo).
"#,
            starter_code: r#"from django.shortcuts import render

from .models import Articulo


def panel(request):
    pass
"#,
            solution_code: r#"from django.contrib.auth.decorators import login_required
from django.shortcuts import render

from .models import Articulo


@login_required(login_url="/entrar/")
def panel(request):
    articulos = Articulo.objects.filter(autor=request.user)
    return render(request, "panel.html", {"articulos": articulos})
"#,
        },
        ExerciseDef {
            sort_order: 10,
            title: "Serializador y ViewSet",
            language: "python",
            description: r#"## API de artículos

Expón los artículos publicados como API de solo lectura.

1. Crea `ArticuloSerializer` con los campos `id`, `titulo`, `slug` y `creado`.
2. Crea `ArticuloViewSet` de solo lectura que liste únicamente artículos publicados.
3. Registra el viewset en un `DefaultRouter` bajo el prefijo `articulos`.
"#,
            starter_code: r#"from rest_framework import routers, serializers, viewsets

from .models import Articulo

router = routers.DefaultRouter()
"#,
            solution_code: r#"from rest_framework import routers, serializers, viewsets

from .models import Articulo


class ArticuloSerializer(serializers.ModelSerializer):
    class Meta:
        model = Articulo
        fields = ["id", "titulo", "slug", "creado"]


class ArticuloViewSet(viewsets.ReadOnlyModelViewSet):
    serializer_class = ArticuloSerializer
    queryset = Articulo.objects.filter(publicado=True)


router = routers.DefaultRouter()
router.register("articulos", ArticuloViewSet)
"#,
        },
        ExerciseDef {
            sort_order: 11,
            title: "Personalizar el admin",
            language: "python",
            description: r#"## Personalizar el admin

Registra `Articulo` en el panel de administración con una clase `ArticuloAdmin`:

- Muestra las columnas `titulo`, `publicado` y `creado`.
- Permite filtrar por `publicado` y buscar por `titulo`.
- Genera el `slug` automáticamente a partir del `titulo`.
"#,
            starter_code: r#"from django.contrib import admin

from .models import Articulo
"#,
            solution_code: r#"from django.contrib import admin

from .models import Articulo


@admin.register(Articulo)
class ArticuloAdmin(admin.ModelAdmin):
    list_display = ["titulo", "publicado", "creado"]
    list_filter = ["publicado"]
    search_fields = ["titulo"]
    prepopulated_fields = {"slug": ["titulo"]}
"#,
        },
        ExerciseDef {
            sort_order: 12,
            title: "Comentarios de un artículo",
            language: "python",
            description: r#"## Comentarios de un artículo

Crea el modelo `Comentario` con:

- `articulo`: clave foránea a `Articulo`, borrado en cascada y `related_name="comentarios"`.
- `autor` (máximo 80 caracteres), `texto` y `creado` (fecha automática).
- Orden por defecto: los más recientes primero.
"#,
            starter_code: r#"from django.db import models

from .models import Articulo


class Comentario(models.Model):
    pass
"#,
            solution_code: r#"from django.db import models

from .models import Articulo


class Comentario(models.Model):
    articulo = models.ForeignKey(
        Articulo, on_delete=models.CASCADE, related_name="comentarios"
    )
    autor = models.CharField(max_length=80)
    texto = models.TextField()
    creado = models.DateTimeField(auto_now_add=True)

    class Meta:
        ordering = ["-creado"]

    def __str__(self):
        return f"{self.autor}: {self.texto[:30]}"
"#,
        },
        ExerciseDef {
            sort_order: 13,
            title: "Perfil automático",
            language: "python",
            description: r#"## Perfil automático

Cada vez que se **crea** un usuario debe crearse también su `Perfil`.

Escribe un receptor de la señal `post_save` del modelo de usuario que cree el perfil
solo cuando `created` sea verdadero.
"#,
            starter_code: r#"from django.conf import settings
from django.db.models.signals import post_save
from django.dispatch import receiver

from .models import Perfil
"#,
            solution_code: r#"from django.conf import settings
from django.db.models.signals import post_save
from django.dispatch import receiver

from .models import Perfil


@receiver(post_save, sender=settings.AUTH_USER_MODEL)
def crear_perfil(sender, instance, created, **kwargs):
    if created:
        Perfil.objects.create(usuario=instance)
"#,
        },
        ExerciseDef {
            sort_order: 14,
            title: "Middleware de tiempo de respuesta",
            language: "python",
            description: r#"## Tiempo de respuesta

Implementa el middleware `TiempoRespuestaMiddleware` que mida cuánto tarda cada
petición y agregue la cabecera `X-Tiempo-Respuesta` con los milisegundos transcurridos.
"#,
            starter_code: r#"import time


class TiempoRespuestaMiddleware:
    def __init__(self, get_response):
        self.get_response = get_response

    def __call__(self, request):
        return self.get_response(request)
"#,
            solution_code: r#"import time


class TiempoRespuestaMiddleware:
    def __init__(self, get_response):
        self.get_response = get_response

    def __call__(self, request):
        inicio = time.perf_counter()
        response = self.get_response(request)
        transcurrido = (time.perf_counter() - inicio) * 1000
        response["X-Tiempo-Respuesta"] = f"{transcurrido:.1f}"
        return response
"#,
        },
        ExerciseDef {
            sort_order: 15,
            title: "Ruta de subida de portadas",
            language: "python",
            description: r#"## Ruta de subida

Agrega a `Articulo` un campo `portada` de tipo `ImageField` opcional.
Las imágenes deben guardarse en `portadas/<slug>/<nombre del archivo>` usando
una función `ruta_portada(instance, filename)`.
"#,
            starter_code: r#"from django.db import models


def ruta_portada(instance, filename):
    return filename


class Articulo(models.Model):
    titulo = models.CharField(max_length=200)
    slug = models.SlugField(unique=True)
"#,
            solution_code: r#"from django.db import models


def ruta_portada(instance, filename):
    return f"portadas/{instance.slug}/{filename}"


class Articulo(models.Model):
    titulo = models.CharField(max_length=200)
    slug = models.SlugField(unique=True)
    portada = models.ImageField(upload_to=ruta_portada, blank=True, null=True)
"#,
        },
        ExerciseDef {
            sort_order: 16,
            title: "Probar la vista de detalle",
            language: "python",
            description: r#"## Probar la vista de detalle

Escribe un `TestCase` con dos pruebas:

1. Un artículo publicado responde **200** y muestra su título.
2. Un slug inexistente responde **404**.
"#,
            starter_code: r#"from django.test import TestCase
from django.urls import reverse

from .models import Articulo


class DetalleArticuloTests(TestCase):
    pass
"#,
            solution_code: r#"from django.test import TestCase
from django.urls import reverse

from .models import Articulo


class DetalleArticuloTests(TestCase):
    def setUp(self):
        self.articulo = Articulo.objects.create(
            titulo="Hola Django", slug="hola-django", publicado=True
        )

    def test_articulo_publicado(self):
        response = self.client.get(reverse("detalle", args=["hola-django"]))
        self.assertEqual(response.status_code, 200)
        self.assertContains(response, "Hola Django")

    def test_slug_inexistente(self):
        response = self.client.get(reverse("detalle", args=["no-existe"]))
        self.assertEqual(response.status_code, 404)
"#,
        },
        ExerciseDef {
            sort_order: 17,
            title: "Cachear una consulta costosa",
            language: "python",
            description: r#"## Cachear una consulta

Implementa `articulos_populares()` que devuelva la lista de los 5 artículos con más visitas.
Guarda el resultado en la caché bajo la clave `articulos_populares` durante 10 minutos
usando `cache.get_or_set`.
"#,
            starter_code: r#"from django.core.cache import cache

from .models import Articulo


def articulos_populares():
    return list(Articulo.objects.order_by("-visitas")[:5])
"#,
            solution_code: r#"from django.core.cache import cache

from .models import Articulo


def articulos_populares():
    return cache.get_or_set(
        "articulos_populares",
        lambda: list(Articulo.objects.order_by("-visitas")[:5]),
        timeout=60 * 10,
    )
"#,
        },
        ExerciseDef {
            sort_order: 18,
            title: "Comando para limpiar borradores",
            language: "python",
            description: r#"## Comando `limpiar_borradores`

Crea el comando de gestión `limpiar_borradores` que elimine los artículos no publicados
creados hace más de `--dias` días (30 por defecto) e imprima cuántos se borraron.
"#,
            starter_code: r#"from django.core.management.base import BaseCommand


class Command(BaseCommand):
    help = "Elimina borradores antiguos"

    def handle(self, *args, **options):
        pass
"#,
            solution_code: r#"from datetime import timedelta

from django.core.management.base import BaseCommand
from django.utils import timezone

from blog.models import Articulo


class Command(BaseCommand):
    help = "Elimina borradores antiguos"

    def add_arguments(self, parser):
        parser.add_argument("--dias", type=int, default=30)

    def handle(self, *args, **options):
        limite = timezone.now() - timedelta(days=options["dias"])
        borrados, _ = Articulo.objects.filter(
            publicado=False, creado__lt=limite
        ).delete()
        self.stdout.write(self.style.SUCCESS(f"{borrados} borradores eliminados"))
"#,
        },
        ExerciseDef {
            sort_order: 19,
            title: "Contar comentarios",
            language: "python",
            description: r#"## Contar comentarios

Implementa `articulos_con_conteo()` que devuelva los artículos publicados anotados con
`total_comentarios`, ordenados de mayor a menor número de comentarios.
"#,
            starter_code: r#"from django.db.models import Count

from .models import Articulo


def articulos_con_conteo():
    return Articulo.objects.all()
"#,
            solution_code: r#"from django.db.models import Count

from .models import Articulo


def articulos_con_conteo():
    return (
        Articulo.objects.filter(publicado=True)
        .annotate(total_comentarios=Count("comentarios"))
        .order_by("-total_comentarios")
    )
"#,
        },
        ExerciseDef {
            sort_order: 20,
            title: "Configuración desde el entorno",
            language: "python",
            description: r#"## Configuración desde el entorno

En `settings.py` lee la configuración sensible de variables de entorno:

- `SECRET_KEY` obligatoria (lanza `ImproperlyConfigured` si falta).
- `DEBUG` activo solo si `DJANGO_DEBUG` vale `"1"`.
- `ALLOWED_HOSTS` a partir de `DJANGO_HOSTS`, separado por comas.
"#,
            starter_code: r#"import os

SECRET_KEY = "cambia-esto"
DEBUG = True
ALLOWED_HOSTS = []
"#,
            solution_code: r#"import os

from django.core.exceptions import ImproperlyConfigured

try:
    SECRET_KEY = os.environ["SECRET_KEY"]
except KeyError as exc:
    raise ImproperlyConfigured("Falta SECRET_KEY") from exc

DEBUG = os.environ.get("DJANGO_DEBUG") == "1"
ALLOWED_HOSTS = [h.strip() for h in os.environ.get("DJANGO_HOSTS", "").split(",") if h.strip()]
"#,
        },
    ],
    quiz: QuizDef {
        title: "Evaluación de Django",
        description: Some("Comprueba lo que aprendiste sobre modelos, vistas y plantillas."),
        questions: &[
            QuestionDef {
                question: "¿Qué comando genera los archivos de migración a partir de los modelos?",
                explanation: Some("`makemigrations` detecta cambios en los modelos; `migrate` los aplica a la base de datos."),
                options: &[
                    OptionDef { text: "python manage.py migrate", correct: false },
                    OptionDef { text: "python manage.py makemigrations", correct: true },
                    OptionDef { text: "python manage.py syncdb", correct: false },
                    OptionDef { text: "python manage.py startapp", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué devuelve `Articulo.objects.filter(publicado=True)`?",
                explanation: Some("`filter` devuelve un QuerySet perezoso, aunque no haya resultados."),
                options: &[
                    OptionDef { text: "Una lista de Python", correct: false },
                    OptionDef { text: "Un único objeto o una excepción", correct: false },
                    OptionDef { text: "Un QuerySet", correct: true },
                    OptionDef { text: "Un diccionario", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué etiqueta de plantilla permite heredar de otra plantilla?",
                explanation: None,
                options: &[
                    OptionDef { text: "{% include %}", correct: false },
                    OptionDef { text: "{% extends %}", correct: true },
                    OptionDef { text: "{% block %}", correct: false },
                    OptionDef { text: "{% load %}", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué atajo responde con 404 cuando el objeto no existe?",
                explanation: Some("`get_object_or_404` envuelve `get()` y lanza `Http404` si no hay coincidencia."),
                options: &[
                    OptionDef { text: "get_object_or_404", correct: true },
                    OptionDef { text: "redirect", correct: false },
                    OptionDef { text: "render", correct: false },
                    OptionDef { text: "reverse", correct: false },
                ],
            },
            QuestionDef {
                question: "¿Qué atributo de `ListView` activa la paginación?",
                explanation: None,
                options: &[
                    OptionDef { text: "page_size", correct: false },
                    OptionDef { text: "per_page", correct: false },
                    OptionDef { text: "paginate_by", correct: true },
                ],
            },
            QuestionDef {
                question: "¿Dónde se registra una aplicación nueva para que Django la cargue?",
                explanation: Some("Las aplicaciones se listan en `INSTALLED_APPS` del archivo de configuración."),
                options: &[
                    OptionDef { text: "En urls.py", correct: false },
                    OptionDef { text: "En INSTALLED_APPS", correct: true },
                    OptionDef { text: "En MIDDLEWARE", correct: false },
                    OptionDef { text: "En wsgi.py", correct: false },
                ],
            },
        ],
    },
};
