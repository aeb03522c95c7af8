//! Help overlay content.

/// Keyboard shortcut definition.
pub struct Shortcut {
    /// Key combination (e.g., "Ctrl+J")
    pub key: &'static str,
    /// Description of what it does
    pub description: &'static str,
}

pub const NAVIGATION_SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        key: "Tab",
        description: "Siguiente campo",
    },
    Shortcut {
        key: "Shift + Tab",
        description: "Campo anterior",
    },
    Shortcut {
        key: "Ctrl + p",
        description: "Enfocar Prompt Base",
    },
    Shortcut {
        key: "Ctrl + t",
        description: "Enfocar Contexto",
    },
    Shortcut {
        key: "Ctrl + o",
        description: "Enfocar Salida",
    },
];

pub const ACTION_SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        key: "F1",
        description: "Mostrar/ocultar esta ayuda",
    },
    Shortcut {
        key: "Ctrl + j",
        description: "Generar commit",
    },
    Shortcut {
        key: "Ctrl + y",
        description: "Copiar salida al portapapeles",
    },
    Shortcut {
        key: "Ctrl + l",
        description: "Limpiar campo de contexto y enfocarlo",
    },
    Shortcut {
        key: "Ctrl + q / Esc",
        description: "Cerrar ayuda o salir de la aplicación",
    },
    Shortcut {
        key: "Ctrl + a",
        description: "Seleccionar todo el texto en el campo actual",
    },
    Shortcut {
        key: "Ctrl + c",
        description: "Copiar texto seleccionado al portapapeles",
    },
];

const FIELD_NOTES: &[(&str, &str)] = &[
    ("Lenguaje", "Idioma del mensaje de commit (Español/English)"),
    ("Modelo", "Modelo Gemini a utilizar (pro/flash)"),
    ("Temperatura", "Creatividad del modelo (0.0-2.0, por defecto 0.2)"),
    ("Contexto", "Información adicional para el modelo"),
    ("Prompt Base", "Instrucciones base para el modelo (editable)"),
    ("Salida", "Resultado generado por el modelo"),
];

const USAGE_STEPS: &[&str] = &[
    "Configura lenguaje, modelo y temperatura según necesites",
    "Opcionalmente agrega contexto en el campo correspondiente",
    "Presiona Ctrl+j para generar el mensaje de commit",
    "Usa Ctrl+y para copiar el resultado al portapapeles",
    "El mensaje se genera basado en los cambios stageados (git diff --cached)",
];

pub const HELP_TITLE: &str = " Ayuda - Controles de la Aplicación ";
pub const HELP_FOOTER: &str = " Cerrar (Esc) ";
pub const HELP_WIDTH: u16 = 80;
pub const HELP_HEIGHT: u16 = 35;

/// Plain-text help body, one entry per line.
pub fn help_lines() -> Vec<String> {
    let mut lines = vec![String::new(), "CONTROLES DE TECLADO:".to_string()];
    lines.push(String::new());
    lines.push("Navegación:".to_string());
    lines.extend(NAVIGATION_SHORTCUTS.iter().map(format_shortcut));
    lines.push(String::new());
    lines.push("Acciones:".to_string());
    lines.extend(ACTION_SHORTCUTS.iter().map(format_shortcut));
    lines.push(String::new());
    lines.push("CAMPOS:".to_string());
    lines.push(String::new());
    lines.extend(
        FIELD_NOTES
            .iter()
            .map(|(name, note)| format!("• {name:<15} - {note}")),
    );
    lines.push(String::new());
    lines.push("USO:".to_string());
    lines.extend(
        USAGE_STEPS
            .iter()
            .enumerate()
            .map(|(idx, step)| format!("{}. {step}", idx + 1)),
    );
    lines
}

fn format_shortcut(shortcut: &Shortcut) -> String {
    format!("  {:<16} - {}", shortcut.key, shortcut.description)
}
