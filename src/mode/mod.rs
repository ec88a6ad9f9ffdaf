//! CLI mode implementations

mod delete;
mod generate;
mod list;
mod preview;

pub(crate) use delete::run_delete;
pub(crate) use generate::run_generate;
pub(crate) use list::run_list;
pub(crate) use preview::run_preview;

use crate::color::{Hsb, hex_to_hsb};
use crate::palette::{self, Palette, Role};

/// One to three seed colors as given on the command line
pub struct Seeds {
    pub primary: String,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
}

impl Seeds {
    pub(crate) fn compose(&self) -> Result<Palette, String> {
        palette::compose(
            &self.primary,
            self.secondary.as_deref(),
            self.tertiary.as_deref(),
        )
        .map_err(|e| e.to_string())
    }

    /// Role, hex and rounded HSB of every supplied seed
    pub(crate) fn describe(&self) -> Result<Vec<(Role, &str, Hsb)>, String> {
        [
            (Role::Primary, Some(&self.primary)),
            (Role::Secondary, self.secondary.as_ref()),
            (Role::Tertiary, self.tertiary.as_ref()),
        ]
        .into_iter()
        .filter_map(|(role, hex)| hex.map(|h| (role, h.as_str())))
        .map(|(role, hex)| {
            hex_to_hsb(hex)
                .map(|hsb| (role, hex, hsb.rounded()))
                .map_err(|e| e.to_string())
        })
        .collect()
    }
}
