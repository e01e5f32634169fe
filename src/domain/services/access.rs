/// Decides whether a caller may mutate a record. The admin identity is
/// injected once at startup and may edit anything; everyone else only
/// their own records. This is the single authoritative check — the UI
/// consumes its result but never re-derives it.
#[derive(Clone)]
pub struct AccessPolicy {
    admin_user: Option<String>,
}

impl AccessPolicy {
    pub fn new(admin_user: Option<String>) -> Self {
        Self { admin_user }
    }

    pub fn can_edit(&self, caller: Option<&str>, owner: &str) -> bool {
        match caller {
            None => false,
            Some(id) => id == owner || self.admin_user.as_deref() == Some(id),
        }
    }
}
