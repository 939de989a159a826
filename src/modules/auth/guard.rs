use async_graphql::Context;
use serde::Serialize;

use crate::modules::user::repository::{user, Role, User};

pub const FORBIDDEN: &str = "Forbidden resource";

/// The authenticated caller, attached to the request data by the middleware.
#[derive(Serialize, Clone, Debug)]
pub struct Auth {
    pub user: User,
}

#[derive(Clone, Copy, Debug)]
pub enum Allowed {
    Any,
    Role(Role),
}

pub fn is_allowed(user: Option<&User>, allowed: Allowed) -> bool {
    match (user, allowed) {
        (None, _) => false,
        (Some(_), Allowed::Any) => true,
        (Some(user), Allowed::Role(role)) => user::is_role(user, role),
    }
}

impl Auth {
    fn require(ctx: &Context<'_>, allowed: Allowed) -> async_graphql::Result<Auth> {
        let auth = ctx.data_opt::<Auth>();
        if !is_allowed(auth.map(|auth| &auth.user), allowed) {
            return Err(async_graphql::Error::new(FORBIDDEN));
        }

        auth.cloned()
            .ok_or_else(|| async_graphql::Error::new(FORBIDDEN))
    }

    pub fn any(ctx: &Context<'_>) -> async_graphql::Result<Auth> {
        Self::require(ctx, Allowed::Any)
    }

    pub fn with_role(ctx: &Context<'_>, role: Role) -> async_graphql::Result<Auth> {
        Self::require(ctx, Allowed::Role(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with(role: Role) -> User {
        User {
            id: String::from("01HZUSER"),
            email: String::from("user@test.com"),
            role,
            verified: true,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn anonymous_callers_are_never_allowed() {
        assert!(!is_allowed(None, Allowed::Any));
        assert!(!is_allowed(None, Allowed::Role(Role::Client)));
    }

    #[test]
    fn any_accepts_every_role() {
        for role in [Role::Client, Role::Owner, Role::Delivery] {
            assert!(is_allowed(Some(&user_with(role)), Allowed::Any));
        }
    }

    #[test]
    fn role_must_match_exactly() {
        let owner = user_with(Role::Owner);
        assert!(is_allowed(Some(&owner), Allowed::Role(Role::Owner)));
        assert!(!is_allowed(Some(&owner), Allowed::Role(Role::Client)));
        assert!(!is_allowed(Some(&owner), Allowed::Role(Role::Delivery)));
    }
}
