//! Collision and geometry core for a 2D canvas game engine.
//!
//! Game code (actors, tiles, scenes) owns one [`collider::Collider`] per object
//! and queries it every frame. Colliders resolve their world-space rectangle or
//! circle and delegate to the stateless routines in [`collision`], which work on
//! raw coordinates and [`point::Point`] values. Displacements are expressed
//! with [`vector::Vector2D`].
//!
//! Everything here is synchronous and allocation-conscious. The only fallible
//! surfaces are the renderer boundary and stage configuration.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`point`] | Mutable 2D point with chaining transforms |
//! | [`vector`] | Mutable 2D displacement vector |
//! | [`collision`] | Stateless containment and intersection tests |
//! | [`collider`] | Positioned bounding volume (none / rectangle / circle) |
//! | [`hit`] | Scene-level hit-testing over many colliders |
//! | [`render`] | [`render::Renderer`] boundary and the browser canvas adapter |
//! | [`stage`] | Stage handle and process-wide dimension configuration |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | Boundary error types |

pub mod collider;
pub mod collision;
pub mod consts;
pub mod error;
pub mod hit;
pub mod point;
pub mod render;
pub mod stage;
pub mod vector;
