/// Frame-by-frame light animation along a path
pub mod animator;
/// Greedy corner-first tile collapse
pub mod collapse;
/// Draw geometry for directed passes through a tile
pub mod geometry;
/// Random number and noise sources
pub mod random;
/// Sketch driver running lights over a solved grid
pub mod sketch;
/// Path generation over a solved grid
pub mod traversal;
