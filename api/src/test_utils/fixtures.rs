//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use super::MockWikiClient;

pub const MASS_ENERGY: &str = "Energy is conserved. Einstein showed that mass and energy \
                               are equivalent.";
pub const KINETIC_ENERGY: &str = "Kinetic energy depends on velocity.";
pub const RELATIVITY: &str = "Einstein's relativity changed how physicists think about energy.";

/// A small `Physics` category with three articles.
///
/// Across the three texts `energy` occurs 4 times and `einstein` twice.
pub fn physics_category() -> MockWikiClient {
    MockWikiClient::new()
        .with_page("Physics", "Mass–energy equivalence", MASS_ENERGY)
        .with_page("Physics", "Kinetic energy", KINETIC_ENERGY)
        .with_page("Physics", "Theory of relativity", RELATIVITY)
}
