/// Three-state patch value for an optional task field.
///
/// - `NoChange`: keep whatever the task currently holds
/// - `Set(value)`: replace it
/// - `Clear`: remove it
///
/// ```
/// use taskmaster_domain::FieldUpdate;
///
/// let mut due: Option<String> = Some("2026-01-01".to_string());
/// FieldUpdate::<String>::NoChange.apply_to(&mut due);
/// assert_eq!(due.as_deref(), Some("2026-01-01"));
///
/// FieldUpdate::Clear.apply_to(&mut due);
/// assert_eq!(due, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    NoChange,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }

    /// Build an update from a pair of CLI-style inputs: a new value and a
    /// clear flag. The clear flag wins when both are given.
    pub fn from_parts(value: Option<T>, clear: bool) -> Self {
        match (value, clear) {
            (_, true) => FieldUpdate::Clear,
            (Some(value), false) => FieldUpdate::Set(value),
            (None, false) => FieldUpdate::NoChange,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some` sets the field, `None` clears it.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}
