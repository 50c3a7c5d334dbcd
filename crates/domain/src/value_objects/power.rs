//! Power - the closed set of abilities a character can carry.
//!
//! Each roster fighter ships with three signature powers, listed together
//! below. Characters store them as a flat ordered list.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! define_powers {
    ($( $variant:ident = $wire:literal ),+ $(,)?) => {
        /// A named ability drawn from the fixed power catalogue.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum Power {
            $( $variant, )+
        }

        impl Power {
            /// Every power, in catalogue order.
            pub const ALL: &'static [Power] = &[ $( Power::$variant, )+ ];

            /// Stable wire name (e.g. `"POSTURA_IMPARABLE"`).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl std::str::FromStr for Power {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(DomainError::parse(format!("Unknown power: {other}"))),
                }
            }
        }
    };
}

define_powers! {
    // Cullien
    BurbujaAntigravedad = "BURBUJA_ANTIGRAVEDAD",
    ChupeteSonico = "CHUPETE_SONICO",
    EscapeWrap = "ESCAPE_WRAP",
    // Meiko
    MechaJumpShot = "MECHA_JUMP_SHOT",
    CampoMagnetico = "CAMPO_MAGNETICO",
    OverboostKawaii = "OVERBOOST_KAWAII",
    // Taekwon
    PatadaDePlasma = "PATADA_DE_PLASMA",
    ConcentracionZen = "CONCENTRACION_ZEN",
    ComboKicks = "COMBO_KICKS",
    // Errant
    AmmoRush = "AMMO_RUSH",
    PosturaImparable = "POSTURA_IMPARABLE",
    GolpeDeAutoridad = "GOLPE_DE_AUTORIDAD",
    // Fishblade
    DoubleKatana = "DOUBLE_KATANA",
    CorteTsunami = "CORTE_TSUNAMI",
    SilencioDelKoi = "SILENCIO_DEL_KOI",
    // Gritshot
    ExplosiveShot = "EXPLOSIVE_SHOT",
    ShotCanon = "SHOT_CANON",
    DinamiteEgg = "DINAMITE_EGG",
    // Furia
    PatadaAerea = "PATADA_AEREA",
    VueloTornado = "VUELO_TORNADO",
    LlaveImposible = "LLAVE_IMPOSIBLE",
    // Grunak
    GarroteMagico = "GARROTE_MAGICO",
    GolpeDeTierra = "GOLPE_DE_TIERRA",
    LlamaRitual = "LLAMA_RITUAL",
    // Lucy
    DestructiveGuitar = "DESTRUCTIVE_GUITAR",
    RiffSismico = "RIFF_SISMICO",
    FeedbackInfernal = "FEEDBACK_INFERNAL",
    // Raidon
    DisparoExplosivo = "DISPARO_EXPLOSIVO",
    TeletransporteCorto = "TELETRANSPORTE_CORTO",
    InterferenciaNeural = "INTERFERENCIA_NEURAL",
    // Bearzerker
    ExplosionDeRabia = "EXPLOSION_DE_RABIA",
    PeluchazoLetal = "PELUCHAZO_LETAL",
    SwingBrutal = "SWING_BRUTAL",
    // Cluster
    RevolverShot = "REVOLVER_SHOT",
    EscudoDePlomo = "ESCUDO_DE_PLOMO",
    CargaDesbocada = "CARGA_DESBOCADA",
    // Luffy
    SnakewoodSlash = "SNAKEWOOD_SLASH",
    AirJump = "AIR_JUMP",
    Supermusculado = "SUPERMUSCULADO",
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
