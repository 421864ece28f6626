//! Role-based authorization rules for every resource on the platform.

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::user::Role;
use crate::domain::value_objects::Actor;
use crate::errors::{AuthError, DomainError};

/// What the actor is trying to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
    /// Reserve a stay on a listing
    Book,
    /// Guest-side cancellation of a booking
    Cancel,
    /// Host-side move of a booking to completed or cancelled
    UpdateStatus,
    /// Approve or reject a listing
    Moderate,
    ChangeRole,
    /// Leave a review on a listing
    Review,
}

/// What the action applies to, with the ownership facts the rules need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// A single account
    User { id: Uuid },
    /// The list of all accounts
    UserDirectory,
    /// A listing that does not exist yet
    NewListing,
    Listing { host_id: Uuid },
    Booking { guest_id: Uuid, host_id: Uuid },
    /// A host's bookings and earnings
    HostDashboard,
    /// The favorites of one user
    Favorites { owner_id: Uuid },
    Review { author_id: Uuid },
    /// Platform-wide analytics
    Platform,
}

/// Decide whether `actor` may perform `action` on `resource`
///
/// Combinations not listed are denied.
pub fn is_authorized(actor: &Actor, action: Action, resource: &Resource) -> bool {
    use Action::*;

    match (*resource, action) {
        (Resource::User { id }, View | Update | Delete) => match actor.role {
            Role::Guest | Role::Host => actor.is(id),
            Role::Admin => true,
        },
        (Resource::User { .. }, ChangeRole) | (Resource::UserDirectory, View) | (Resource::Platform, View) => {
            match actor.role {
                Role::Guest | Role::Host => false,
                Role::Admin => true,
            }
        }

        (Resource::NewListing, Create) => match actor.role {
            Role::Host => true,
            Role::Guest | Role::Admin => false,
        },
        (Resource::Listing { host_id }, Update) => match actor.role {
            Role::Host => actor.is(host_id),
            Role::Guest | Role::Admin => false,
        },
        (Resource::Listing { host_id }, Delete) => match actor.role {
            Role::Guest => false,
            Role::Host => actor.is(host_id),
            Role::Admin => true,
        },
        (Resource::Listing { .. }, Moderate) => match actor.role {
            Role::Guest | Role::Host => false,
            Role::Admin => true,
        },
        (Resource::Listing { .. }, Book) => match actor.role {
            Role::Guest | Role::Admin => true,
            Role::Host => false,
        },
        (Resource::Listing { host_id }, Review) => match actor.role {
            Role::Guest | Role::Admin => true,
            Role::Host => !actor.is(host_id),
        },

        (Resource::Booking { guest_id, host_id }, View) => match actor.role {
            Role::Guest => actor.is(guest_id),
            Role::Host => actor.is(host_id),
            Role::Admin => true,
        },
        (Resource::Booking { guest_id, .. }, Cancel) => match actor.role {
            Role::Guest => actor.is(guest_id),
            Role::Host => false,
            Role::Admin => true,
        },
        (Resource::Booking { host_id, .. }, UpdateStatus) => match actor.role {
            Role::Guest => false,
            Role::Host => actor.is(host_id),
            Role::Admin => true,
        },

        (Resource::HostDashboard, View) => match actor.role {
            Role::Host => true,
            Role::Guest | Role::Admin => false,
        },

        (Resource::Favorites { owner_id }, Create | View) => actor.is(owner_id),
        (Resource::Favorites { owner_id }, Delete) => match actor.role {
            Role::Guest | Role::Host => actor.is(owner_id),
            Role::Admin => true,
        },

        (Resource::Review { author_id }, Delete) => match actor.role {
            Role::Guest | Role::Host => actor.is(author_id),
            Role::Admin => true,
        },

        _ => false,
    }
}

/// Same as [`is_authorized`], as a `Result` for use with `?`
pub fn authorize(actor: &Actor, action: Action, resource: &Resource) -> Result<(), DomainError> {
    if is_authorized(actor, action, resource) {
        Ok(())
    } else {
        debug!(
            actor_id = %actor.id,
            role = %actor.role,
            ?action,
            ?resource,
            "Authorization denied"
        );
        Err(AuthError::InsufficientPermissions.into())
    }
}
