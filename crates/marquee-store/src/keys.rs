//! Key construction for the flat store keyspace.
//!
//! Keys are part of the persisted format: existing data directories depend
//! on these exact strings, so changes here are breaking.

use marquee_core::MovieId;

/// Key holding the JSON array of registered users.
pub const USERS: &str = "users";

/// Key holding the session record of the logged-in user.
pub const CURRENT_USER: &str = "currentUser";

/// Key holding the ticket array for `email`.
#[must_use]
pub fn tickets_key(email: &str) -> String {
    format!("tickets_{email}")
}

/// Key holding the occupied-seat array for `movie_id`.
#[must_use]
pub fn occupied_seats_key(movie_id: MovieId) -> String {
    format!("occupiedSeats_movie_{movie_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_keys_embed_the_email() {
        assert_eq!(tickets_key("ana@example.com"), "tickets_ana@example.com");
    }

    #[test]
    fn occupancy_keys_embed_the_movie_id() {
        assert_eq!(
            occupied_seats_key(MovieId::new(7)),
            "occupiedSeats_movie_7"
        );
    }

    #[test]
    fn fixed_keys_are_stable() {
        assert_eq!(USERS, "users");
        assert_eq!(CURRENT_USER, "currentUser");
    }
}
