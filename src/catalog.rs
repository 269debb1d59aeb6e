//! Catálogo estático del sitio: proyectos del portafolio y servicios
//! detallados. Todo es contenido de compilación; nada se muta ni se
//! descarga en tiempo de ejecución.

use crate::gallery::Category;

pub const IMAGES_PER_PROJECT: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub location: &'static str,
    pub year: Option<&'static str>,
    pub summary: &'static str,
    /// Cuatro vistas por proyecto; la primera es la portada.
    pub images: [ProjectImage; IMAGES_PER_PROJECT],
}

pub const PROJECTS: [Project; 4] = [
    Project {
        id: "p1",
        title: "Proyecto 01 — Fachada Residencial",
        category: Category::Fachada,
        location: "Chiapas, MX",
        year: Some("2025"),
        summary: "Reinterpretación minimalista con énfasis en proporción, ritmo de vanos y materialidad sobria.",
        images: [
            ProjectImage { src: "/proyectos/p1/01.jpg", alt: "Fachada - vista 01" },
            ProjectImage { src: "/proyectos/p1/02.jpg", alt: "Fachada - vista 02" },
            ProjectImage { src: "/proyectos/p1/03.jpg", alt: "Fachada - vista 03" },
            ProjectImage { src: "/proyectos/p1/04.jpg", alt: "Fachada - vista 04" },
        ],
    },
    Project {
        id: "p2",
        title: "Proyecto 02 — Área Social",
        category: Category::AreaSocial,
        location: "México",
        year: Some("2025"),
        summary: "Zonificación clara para sala–comedor–cocina con iluminación cuidada y continuidad de materiales.",
        images: [
            ProjectImage { src: "/proyectos/p2/01.jpg", alt: "Área social - vista 01" },
            ProjectImage { src: "/proyectos/p2/02.jpg", alt: "Área social - vista 02" },
            ProjectImage { src: "/proyectos/p2/03.jpg", alt: "Área social - vista 03" },
            ProjectImage { src: "/proyectos/p2/04.jpg", alt: "Área social - vista 04" },
        ],
    },
    Project {
        id: "p3",
        title: "Proyecto 03 — Proyecto Arquitectónico Completo",
        category: Category::ProyectoCompleto,
        location: "MX / USA",
        year: Some("2024"),
        summary: "Desarrollo integral con coherencia interior–exterior y entregables definidos por etapas.",
        images: [
            ProjectImage { src: "/proyectos/p3/01.jpg", alt: "Proyecto completo - vista 01" },
            ProjectImage { src: "/proyectos/p3/02.jpg", alt: "Proyecto completo - vista 02" },
            ProjectImage { src: "/proyectos/p3/03.jpg", alt: "Proyecto completo - vista 03" },
            ProjectImage { src: "/proyectos/p3/04.jpg", alt: "Proyecto completo - vista 04" },
        ],
    },
    Project {
        id: "p4",
        title: "Proyecto 04 — Visualización 3D",
        category: Category::Renders3d,
        location: "USA",
        year: Some("2024"),
        summary: "Renders fotorrealistas para validación de diseño y presentación con atmósfera editorial.",
        images: [
            ProjectImage { src: "/proyectos/p4/01.jpg", alt: "Renders 3D - vista 01" },
            ProjectImage { src: "/proyectos/p4/02.jpg", alt: "Renders 3D - vista 02" },
            ProjectImage { src: "/proyectos/p4/03.jpg", alt: "Renders 3D - vista 03" },
            ProjectImage { src: "/proyectos/p4/04.jpg", alt: "Renders 3D - vista 04" },
        ],
    },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ServiceDetail {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub for_who: &'static [&'static str],
    pub includes: &'static [&'static str],
    pub deliverables: &'static [&'static str],
    pub timeline: &'static [&'static str],
    pub inputs: &'static [&'static str],
    pub add_ons: &'static [&'static str],
    pub notes: &'static [&'static str],
}

pub const SERVICES: [ServiceDetail; 4] = [
    ServiceDetail {
        id: "fachada",
        title: "Diseño de Fachada",
        subtitle: "Eleva la presencia de tu proyecto con una propuesta estética y coherente: materiales, composición y visualización.",
        for_who: &[
            "Casas nuevas o remodelaciones",
            "Frentes comerciales que necesitan mejor imagen",
            "Proyectos donde quieres aumentar valor percibido",
        ],
        includes: &[
            "Brief (estilo, referencias, restricciones y presupuesto)",
            "Propuesta de composición (volúmenes, accesos, ritmo de vanos)",
            "Paleta de materiales y criterios de acabados",
            "Modelado base para visualizar la propuesta",
            "Renders exteriores (cantidad según cotización) + ajustes por etapa",
        ],
        deliverables: &[
            "PDF con concepto y propuesta final",
            "Renders exteriores en alta resolución (JPG/PNG)",
            "Versiones optimizadas para web/redes",
        ],
        timeline: &[
            "Día 1: brief + referencias",
            "Días 2–4: primera propuesta",
            "Días 5–7: ajustes + entrega final (estimado)",
        ],
        inputs: &[
            "Fotos del frente actual (si es remodelación)",
            "Medidas del terreno/banqueta y alturas aproximadas",
            "Referencias (links) de estilo/materiales",
            "Restricciones del fraccionamiento/municipio (si aplica)",
        ],
        add_ons: &["Renders nocturnos", "Más ángulos / vistas", "Video corto (si se cotiza)"],
        notes: &[
            "El número de vistas y el nivel de detalle (vegetación, mobiliario urbano, etc.) se define en la cotización.",
        ],
    },
    ServiceDetail {
        id: "area-social",
        title: "Diseño de Área Social",
        subtitle: "Distribución, ambientación e iluminación para sala–comedor–cocina (o equivalente) con un flujo funcional.",
        for_who: &[
            "Remodelaciones de interiores",
            "Casas nuevas que requieren buena zonificación",
            "Espacios donde quieres funcionalidad y estética editorial",
        ],
        includes: &[
            "Análisis de necesidades (uso, flujo, almacenamiento, mobiliario)",
            "Propuesta de layout y zonificación",
            "Criterios de iluminación y materiales",
            "Modelado 3D para validación del diseño",
            "Renders interiores (cantidad según cotización) + ajustes por etapa",
        ],
        deliverables: &[
            "PDF con propuesta de distribución",
            "Renders interiores en alta resolución",
            "Guía de materiales/colores recomendados",
        ],
        timeline: &[
            "Día 1: brief + medidas/fotos",
            "Días 2–5: distribución + 3D",
            "Días 6–10: renders + ajustes + entrega (estimado)",
        ],
        inputs: &[
            "Planta/medidas del área o croquis con medidas",
            "Fotos del espacio (si ya existe)",
            "Necesidades (personas, usos, estilo, almacenamiento)",
            "Referencias (links) de interiores",
        ],
        add_ons: &["Listado sugerido de mobiliario", "Renders extra", "Recorrido (si se cotiza)"],
        notes: &[],
    },
    ServiceDetail {
        id: "proyecto-completo",
        title: "Proyecto Arquitectónico Completo",
        subtitle: "Servicio integral para llevar tu idea a un proyecto coherente: diseño, desarrollo y visualización final.",
        for_who: &[
            "Casa habitación",
            "Local / espacio comercial",
            "Proyectos que requieren coherencia interior–exterior",
        ],
        includes: &[
            "Programa arquitectónico (necesidades, m² objetivo, prioridades)",
            "Anteproyecto (distribución + volumetría)",
            "Ajustes por etapas con revisiones definidas",
            "Modelado 3D y renders finales para presentación",
            "Paquete de planos en PDF (según alcance acordado)",
        ],
        deliverables: &[
            "PDF de planos (según paquete: plantas/cortes/fachadas, etc.)",
            "Modelado 3D (según cotización)",
            "Renders finales (interiores/exteriores, según cotización)",
        ],
        timeline: &[
            "Semana 1: brief + anteproyecto",
            "Semana 2: ajustes + desarrollo",
            "Semana 3+: renders/entrega (depende de m² y complejidad)",
        ],
        inputs: &[
            "Ubicación y restricciones (fraccionamiento/municipio)",
            "Medidas del terreno y orientación (ideal: norte)",
            "Programa arquitectónico deseado",
            "Referencias (links) y presupuesto estimado",
        ],
        add_ons: &["Más áreas/renders", "Etapas adicionales", "Recorrido (si se cotiza)"],
        notes: &[
            "Los planos específicos incluidos se definen según el paquete contratado.",
        ],
    },
    ServiceDetail {
        id: "renders",
        title: "Renders y Visualización 3D",
        subtitle: "Imágenes fotorrealistas para preventa, presentación o validación de decisiones antes de construir.",
        for_who: &["Preventas", "Portafolio profesional", "Proyectos en etapa de decisión"],
        includes: &[
            "Revisión de información base (planos/croquis/modelo)",
            "Definición de estilo visual (luz, atmósfera, materiales)",
            "Renders con encuadres estratégicos",
            "Ajustes de color/composición para entrega final",
        ],
        deliverables: &[
            "Renders en alta resolución (JPG/PNG)",
            "Versiones optimizadas para web",
            "Opcional: video recorrido (si se cotiza)",
        ],
        timeline: &[
            "1–2 días: preparación (según calidad de info)",
            "2–5 días: producción y entrega (según número de vistas)",
        ],
        inputs: &[
            "Plantas con medidas (o modelo 3D)",
            "Referencias de estilo (materiales, mood, iluminación)",
            "Lista de vistas deseadas (ángulos)",
            "Fecha objetivo de entrega",
        ],
        add_ons: &["Renders nocturnos", "Más vistas", "Animación/recorrido"],
        notes: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_category_has_a_project() {
        for cat in Category::ALL {
            assert!(PROJECTS.iter().any(|p| p.category == cat));
        }
    }
}
