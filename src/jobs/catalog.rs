use crate::{
    jobs::model::{Job, JobManifest},
    layout::MockupLayout,
};

/// Suffix appended to every Spanish output file name.
pub const SPANISH_SUFFIX: &str = "-ES";

const SIMULATOR_PREFIX: &str = "Simulator Screenshot - iPad Pro 13-inch (M5) - 2026-02-26 at ";

// (template stem, capture time, headline)
const SPANISH_IPAD: &[(&str, &str, &str)] = &[
    (
        "StartScreenExposed",
        "22.01.32",
        "Empieza al instante en modo solo o multijugador.",
    ),
    (
        "CreateLobbyEXPOSED",
        "22.02.03",
        "Personaliza tu partida en segundos antes de empezar.",
    ),
    (
        "IngameSafeEXPOSED",
        "22.02.19",
        "Mantén las rondas en marcha con votación grupal rápida.",
    ),
    (
        "IngameDeeperEXPOSED",
        "22.02.36",
        "Desbloquea preguntas más profundas a medida que sube el nivel.",
    ),
    (
        "IngameSecretiveEXPOSED",
        "22.02.42",
        "Lleva preguntas secretive atrevidas a tu próxima ronda.",
    ),
    (
        "IngameFreakyEXPOSED",
        "22.02.52",
        "Sube la energía con el divertido modo freaky.",
    ),
    (
        "SettingsEXPOSED",
        "22.02.59",
        "Cambia el idioma y los ajustes legales con un toque.",
    ),
];

/// The seven Spanish iPad Pro 13" App Store mockups.
pub fn spanish_ipad_jobs() -> Vec<Job> {
    SPANISH_IPAD
        .iter()
        .map(|(stem, time, headline)| {
            Job::new(
                format!("{stem}.png"),
                format!("{SIMULATOR_PREFIX}{time}.png"),
                *headline,
                format!("{stem}{SPANISH_SUFFIX}.png"),
            )
        })
        .collect()
}

impl JobManifest {
    /// Built-in manifest: iPad Pro 13" layout with [`spanish_ipad_jobs`].
    pub fn spanish_ipad() -> Self {
        Self {
            layout: MockupLayout::ipad_pro_13(),
            jobs: spanish_ipad_jobs(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/jobs/catalog.rs"]
mod tests;
