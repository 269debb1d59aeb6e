/// Número destino de WhatsApp del estudio.
/// Formato para México: 521 + 10 dígitos, sin `+` y sin espacios.
pub const WHATSAPP_NUMBER: &str = "5212217677185";

/// Link directo sin mensaje prellenado ("Abrir WhatsApp directo").
pub fn whatsapp_direct_link() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

/// Un número con `X` es el placeholder de la plantilla, no un número real.
pub fn assert_number_configured() {
    debug_assert!(
        !WHATSAPP_NUMBER.contains('X'),
        "WHATSAPP_NUMBER sigue siendo el placeholder"
    );
}
