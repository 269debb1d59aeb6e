//! Pipeline de contacto: borrador del formulario, validación por campo,
//! plantilla del mensaje y deep link a WhatsApp.
//!
//! Nada aquí toca el DOM. La página de contacto es dueña del
//! `ContactDraft`, recalcula `validate` en cada cambio y solo al enviar
//! construye el mensaje y la URL; abrir la URL es responsabilidad del
//! componente.

pub const GREETING: &str = "Hola AES Arquitectos, quiero una cotización:";

pub const DEFAULT_LOCATION: &str = "Chiapas / MX";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Service {
    Fachada,
    AreaSocial,
    ProyectoCompleto,
    Renders3d,
    Otro,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Fachada,
        Service::AreaSocial,
        Service::ProyectoCompleto,
        Service::Renders3d,
        Service::Otro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Service::Fachada => "Fachada",
            Service::AreaSocial => "Área social",
            Service::ProyectoCompleto => "Proyecto completo",
            Service::Renders3d => "Renders 3D",
            Service::Otro => "Otro",
        }
    }

    /// Parseo del valor del `<select>`. Un valor desconocido devuelve
    /// `None` y el campo conserva su selección anterior.
    pub fn from_label(label: &str) -> Option<Service> {
        Service::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: Service,
    pub location: String,
    pub budget: String,
    pub timeframe: String,
    pub message: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        ContactDraft {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            service: Service::ProyectoCompleto,
            location: DEFAULT_LOCATION.to_string(),
            budget: String::new(),
            timeframe: String::new(),
            message: String::new(),
        }
    }
}

/// Mensajes de error por campo requerido. `email`, `budget` y
/// `timeframe` nunca son requeridos y no aparecen aquí.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Validation {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub location: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.message.is_none()
    }
}

/// Pura y determinista; se recalcula en cada render sin costo relevante.
/// Un servicio fuera del conjunto es irrepresentable con el enum, así
/// que no hay mensaje de error para `service`.
pub fn validate(draft: &ContactDraft) -> Validation {
    let mut v = Validation::default();
    if draft.name.trim().is_empty() {
        v.name = Some("Ingresa tu nombre.");
    }
    if draft.phone.trim().is_empty() {
        v.phone = Some("Ingresa tu WhatsApp o teléfono.");
    }
    if draft.location.trim().is_empty() {
        v.location = Some("Indica ubicación (ciudad/estado).");
    }
    if draft.message.trim().is_empty() {
        v.message = Some("Cuéntanos brevemente tu proyecto.");
    }
    v
}

/// Plantilla de orden y etiquetas fijas. Las líneas opcionales vacías se
/// omiten por completo, no se dejan en blanco.
pub fn build_message(draft: &ContactDraft) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(12);
    lines.push(GREETING.to_string());
    lines.push(String::new());
    lines.push(format!("Nombre: {}", draft.name));
    lines.push(format!("WhatsApp/Teléfono: {}", draft.phone));
    if !draft.email.is_empty() {
        lines.push(format!("Email: {}", draft.email));
    }
    lines.push(format!("Servicio: {}", draft.service.label()));
    lines.push(format!("Ubicación: {}", draft.location));
    if !draft.budget.is_empty() {
        lines.push(format!("Presupuesto estimado: {}", draft.budget));
    }
    if !draft.timeframe.is_empty() {
        lines.push(format!("Tiempo deseado: {}", draft.timeframe));
    }
    lines.push(String::new());
    lines.push("Detalles del proyecto:".to_string());
    lines.push(draft.message.clone());
    lines.join("\n")
}

/// `number` va en formato internacional sin `+`. No se valida aquí: un
/// número mal configurado es un defecto de despliegue, no un error de
/// runtime (ver `config::assert_number_configured`).
pub fn build_deep_link(number: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ContactDraft {
        ContactDraft {
            name: "Ana".to_string(),
            phone: "9611234567".to_string(),
            email: String::new(),
            service: Service::Fachada,
            location: "Tuxtla".to_string(),
            budget: String::new(),
            timeframe: String::new(),
            message: "Quiero remodelar mi fachada".to_string(),
        }
    }

    #[test]
    fn default_draft_preselects_service_and_location() {
        let d = ContactDraft::default();
        assert_eq!(d.service, Service::ProyectoCompleto);
        assert_eq!(d.location, DEFAULT_LOCATION);
        assert!(d.name.is_empty() && d.phone.is_empty() && d.message.is_empty());
    }

    #[test]
    fn complete_draft_is_valid() {
        assert!(validate(&filled_draft()).is_valid());
    }

    #[test]
    fn each_missing_required_field_reports_only_itself() {
        let mut d = filled_draft();
        d.name = "   ".to_string();
        let v = validate(&d);
        assert_eq!(v.name, Some("Ingresa tu nombre."));
        assert!(v.phone.is_none() && v.location.is_none() && v.message.is_none());

        let mut d = filled_draft();
        d.phone = String::new();
        let v = validate(&d);
        assert_eq!(v.phone, Some("Ingresa tu WhatsApp o teléfono."));
        assert!(v.name.is_none() && v.location.is_none() && v.message.is_none());

        let mut d = filled_draft();
        d.location = String::new();
        let v = validate(&d);
        assert_eq!(v.location, Some("Indica ubicación (ciudad/estado)."));

        let mut d = filled_draft();
        d.message = "\n\t".to_string();
        let v = validate(&d);
        assert_eq!(v.message, Some("Cuéntanos brevemente tu proyecto."));
    }

    #[test]
    fn optional_fields_never_block_validation() {
        let mut d = filled_draft();
        d.email = String::new();
        d.budget = String::new();
        d.timeframe = String::new();
        assert!(validate(&d).is_valid());
    }

    #[test]
    fn message_omits_empty_optional_lines() {
        let text = build_message(&filled_draft());
        assert!(!text.contains("Email:"));
        assert!(!text.contains("Presupuesto estimado:"));
        assert!(!text.contains("Tiempo deseado:"));
        assert!(text.contains("Nombre: Ana"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn message_includes_optional_lines_when_present() {
        let mut d = filled_draft();
        d.email = "ana@email.com".to_string();
        d.budget = "$80,000 MXN".to_string();
        d.timeframe = "2–3 semanas".to_string();
        let text = build_message(&d);
        assert!(text.contains("Email: ana@email.com"));
        assert!(text.contains("Presupuesto estimado: $80,000 MXN"));
        assert!(text.contains("Tiempo deseado: 2–3 semanas"));
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn message_follows_fixed_order() {
        let text = build_message(&filled_draft());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], GREETING);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Nombre: Ana");
        assert_eq!(lines[3], "WhatsApp/Teléfono: 9611234567");
        assert_eq!(lines[4], "Servicio: Fachada");
        assert_eq!(lines[5], "Ubicación: Tuxtla");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Detalles del proyecto:");
        assert_eq!(lines[8], "Quiero remodelar mi fachada");
    }

    #[test]
    fn deep_link_round_trips_through_percent_encoding() {
        let text = build_message(&filled_draft());
        let url = build_deep_link("521XXXXXXXXXX", &text);
        assert!(url.starts_with("https://wa.me/521XXXXXXXXXX?text=Hola%20"));
        let encoded = url.split("?text=").nth(1).unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), text);
    }

    #[test]
    fn deep_link_encodes_newlines_and_reserved_chars() {
        let url = build_deep_link("521", "a b\nc&d=e?f");
        assert_eq!(url, "https://wa.me/521?text=a%20b%0Ac%26d%3De%3Ff");
    }

    #[test]
    fn service_labels_round_trip() {
        for s in Service::ALL {
            assert_eq!(Service::from_label(s.label()), Some(s));
        }
        assert_eq!(Service::from_label("Paisajismo"), None);
    }
}
