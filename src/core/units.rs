/// Display-only unit labels; numbers are never converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitSystem {
    Si,
    Us,
}

impl UnitSystem {
    /// "SI" in any case selects metric labels; every other token falls back to US.
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("SI") {
            UnitSystem::Si
        } else {
            UnitSystem::Us
        }
    }

    pub fn time_unit(self) -> &'static str {
        "s"
    }

    pub fn length_unit(self) -> &'static str {
        match self {
            UnitSystem::Si => "m",
            UnitSystem::Us => "ft",
        }
    }

    pub fn velocity_unit(self) -> &'static str {
        match self {
            UnitSystem::Si => "m/s",
            UnitSystem::Us => "ft/s",
        }
    }

    pub fn gravity_unit(self) -> &'static str {
        match self {
            UnitSystem::Si => "m/s^2",
            UnitSystem::Us => "ft/s^2",
        }
    }
}
