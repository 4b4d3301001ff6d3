use gridlab_core::{Map, Point};

/// How the path of a [`DrawRequest`] is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Path painted cell by cell; re-expanded nodes are shown.
    Discrete,
    /// Path drawn as one line through cell centres.
    Continuous,
}

/// Everything a sink needs to draw one search result.
#[derive(Debug, Clone)]
pub struct DrawRequest<'a> {
    pub mode: DrawMode,
    pub map: &'a Map,
    pub start: Option<Point>,
    pub goal: Option<Point>,
    pub path: Option<Vec<Point>>,
    pub discovered: Option<Vec<Point>>,
    pub expanded: Option<Vec<Point>>,
    /// Only drawn in [`DrawMode::Discrete`].
    pub reexpanded: Option<Vec<Point>>,
}

impl<'a> DrawRequest<'a> {
    /// A request that only draws the map's obstacles.
    pub fn new(mode: DrawMode, map: &'a Map) -> Self {
        Self {
            mode,
            map,
            start: None,
            goal: None,
            path: None,
            discovered: None,
            expanded: None,
            reexpanded: None,
        }
    }

    pub fn with_endpoints(mut self, start: Point, goal: Point) -> Self {
        self.start = Some(start);
        self.goal = Some(goal);
        self
    }

    pub fn with_path(mut self, path: Vec<Point>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_discovered(mut self, nodes: Vec<Point>) -> Self {
        self.discovered = Some(nodes);
        self
    }

    pub fn with_expanded(mut self, nodes: Vec<Point>) -> Self {
        self.expanded = Some(nodes);
        self
    }

    pub fn with_reexpanded(mut self, nodes: Vec<Point>) -> Self {
        self.reexpanded = Some(nodes);
        self
    }
}
