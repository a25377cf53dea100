//! Fixed tuning constants of the extraction pipeline.
//!
//! The original pipeline uses one radius for two different concerns; the two
//! names below keep that coupling explicit so future tuning does not silently
//! desynchronize them.

/// Clustering radius for vertex deduplication, in pixels. Two candidate
/// vertex centers within this radius collapse to the first-registered one.
pub const VERTEX_RADIUS: i32 = 60;

/// Ray length of the visited-area scan that suppresses re-seeding near
/// already-traced ink. Intentionally bound to [`VERTEX_RADIUS`]: the seed
/// clearance and the vertex clustering share one radius by design.
pub const SEED_CLEARANCE_RADIUS: i32 = VERTEX_RADIUS;

/// Squared [`VERTEX_RADIUS`] compared against exact squared distances.
pub const VERTEX_RADIUS_SQ: i64 = (VERTEX_RADIUS as i64) * (VERTEX_RADIUS as i64);

/// Consecutive tracer iterations without marking a pixel before a trace is
/// abandoned. The walk alternates two directions and rotates through at most
/// four probing eras; a trace that makes no progress for this long has no
/// unvisited continuation in any direction and would otherwise spin on
/// revisited ink.
pub const STALL_LIMIT: u32 = 24;
