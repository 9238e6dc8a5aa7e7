// src/common/ownership.rs

use uuid::Uuid;

use crate::common::error::AppError;

// Anything gated on ownership (shops today; products and orders resolve to
// their shop first) exposes who owns it through this trait, so the check
// lives in one place instead of being repeated per route.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

pub fn is_owner(actor_id: Uuid, resource: &impl Owned) -> bool {
    resource.owner_id() == actor_id
}

// The common "owner or 403" gate.
pub fn ensure_owner(actor_id: Uuid, resource: &impl Owned) -> Result<(), AppError> {
    if is_owner(actor_id, resource) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing {
        owner: Uuid,
    }

    impl Owned for Thing {
        fn owner_id(&self) -> Uuid {
            self.owner
        }
    }

    #[test]
    fn owner_passes_everyone_else_is_forbidden() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let thing = Thing { owner };

        assert!(ensure_owner(owner, &thing).is_ok());
        assert!(matches!(
            ensure_owner(stranger, &thing),
            Err(AppError::Forbidden)
        ));
    }
}
