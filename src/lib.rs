//! A randomized treap that caches subtree size and depth in every node, plus a renderer that
//! reads those values to lay the tree out as an SVG picture.

pub mod svg;
pub mod treap;
