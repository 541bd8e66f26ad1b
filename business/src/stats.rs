//! Stat descriptors for the dashboard cards and the management template's
//! stats row.

/// Declarative stat over an entity collection: the value is derived from
/// whatever the page currently holds.
pub struct StatConfig<R> {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub derive: fn(&[R]) -> u64,
}

impl<R> StatConfig<R> {
    pub fn card(&self, rows: &[R]) -> StatCard {
        StatCard {
            title: self.title,
            icon: self.icon,
            value: (self.derive)(rows).to_string(),
            description: self.description.to_owned(),
        }
    }
}

/// A resolved stat ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub description: String,
}
