use crate::treap::{Node, Treap};

/// Geometry of a rendered treap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Radius of every vertex circle. Each node gets a column `4 * vertex_radius` wide and each
    /// level is `4 * vertex_radius` tall.
    pub vertex_radius: f64,
    /// Blank space around the drawing on every side.
    pub margin: f64,
}

impl RenderConfig {
    /// Constructs a configuration with the given vertex radius and margin.
    pub fn new(vertex_radius: f64, margin: f64) -> Self {
        RenderConfig {
            vertex_radius,
            margin,
        }
    }

    /// Returns the width of a column and the height of a level.
    pub fn cell(&self) -> f64 {
        4.0 * self.vertex_radius
    }

    /// Returns the stroke width of circles and edges.
    pub fn stroke_width(&self) -> f64 {
        self.vertex_radius / 5.0
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::new(10.0, 50.0)
    }
}

/// Where a single node ends up in the picture.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub parent: Option<(f64, f64)>,
}

/// The placements of every node of a treap, in pre-order, plus the document size.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub placements: Vec<Placement>,
}

impl Layout {
    /// Lays out `treap` by reading only the cached subtree sizes and depths. A node's column is
    /// its in-order rank, which is the number of nodes to its left, and its row is its level.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::svg::{Layout, RenderConfig};
    /// use treap_layout::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, ());
    /// t.insert(2, ());
    ///
    /// let layout = Layout::new(&t, &RenderConfig::default());
    /// assert_eq!(layout.placements.len(), 2);
    /// assert_eq!(layout.width, 180.0);
    /// ```
    pub fn new<T, U, R>(treap: &Treap<T, U, R>, config: &RenderConfig) -> Self
    where
        T: ToString,
    {
        let cell = config.cell();
        let mut placements = Vec::with_capacity(treap.size());
        if let Some(root) = treap.root() {
            place(root, config.margin, 0, None, config, &mut placements);
        }
        Layout {
            width: 2.0 * config.margin + treap.size() as f64 * cell,
            height: 2.0 * config.margin + treap.depth() as f64 * cell,
            placements,
        }
    }
}

fn place<T, U>(
    node: &Node<T, U>,
    x_start: f64,
    level: usize,
    parent: Option<(f64, f64)>,
    config: &RenderConfig,
    placements: &mut Vec<Placement>,
) where
    T: ToString,
{
    let radius = config.vertex_radius;
    let cell = config.cell();
    let x = x_start + cell * node.rank() as f64 + 2.0 * radius;
    let y = config.margin + cell * level as f64 + radius;

    placements.push(Placement {
        label: node.key().to_string(),
        x,
        y,
        parent,
    });

    if let Some(left) = node.left() {
        place(left, x_start, level + 1, Some((x, y)), config, placements);
    }
    if let Some(right) = node.right() {
        place(right, x + 2.0 * radius, level + 1, Some((x, y)), config, placements);
    }
}

#[cfg(test)]
mod tests {
    use super::{Layout, RenderConfig};
    use crate::treap::Treap;

    #[test]
    fn test_layout_empty() {
        let treap: Treap<u32, ()> = Treap::new();
        let layout = Layout::new(&treap, &RenderConfig::default());
        assert!(layout.placements.is_empty());
        assert_eq!(layout.width, 100.0);
        assert_eq!(layout.height, 100.0);
    }

    #[test]
    fn test_layout_columns_follow_key_order() {
        let mut treap = Treap::with_seed([69, 69, 69, 69]);
        for key in &[20, 2, 10, 15, 7, 2] {
            treap.insert(*key, ());
        }
        let config = RenderConfig::default();
        let layout = Layout::new(&treap, &config);

        let mut columns = layout
            .placements
            .iter()
            .map(|placement| (placement.x, placement.label.parse::<u32>().unwrap()))
            .collect::<Vec<(f64, u32)>>();
        columns.sort_by(|l, r| l.0.partial_cmp(&r.0).unwrap());

        assert_eq!(
            columns.iter().map(|column| column.1).collect::<Vec<u32>>(),
            vec![2, 2, 7, 10, 15, 20],
        );
        for (rank, column) in columns.iter().enumerate() {
            let expected = config.margin + config.cell() * rank as f64 + 2.0 * config.vertex_radius;
            assert_eq!(column.0, expected);
        }
    }

    #[test]
    fn test_layout_rows_follow_depth() {
        let mut treap = Treap::with_seed([1, 2, 3, 4]);
        for key in 0..32u32 {
            treap.insert(key, ());
        }
        let config = RenderConfig::new(5.0, 10.0);
        let layout = Layout::new(&treap, &config);

        assert_eq!(layout.placements.len(), 32);
        assert_eq!(layout.placements.iter().filter(|p| p.parent.is_none()).count(), 1);
        let deepest = layout
            .placements
            .iter()
            .map(|placement| placement.y)
            .fold(0.0, f64::max);
        let expected =
            config.margin + config.cell() * (treap.depth() - 1) as f64 + config.vertex_radius;
        assert_eq!(deepest, expected);
        for placement in &layout.placements {
            if let Some((_, parent_y)) = placement.parent {
                assert_eq!(placement.y - parent_y, config.cell());
            }
        }
    }
}
