/// One input record: a game identifier, its feature vector, and the
/// cluster it currently belongs to (`None` until the first assignment).
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub game_id: i64,
    pub features: Vec<f64>,
    pub cluster: Option<usize>,
}

impl Point {
    pub fn new(game_id: i64, features: Vec<f64>) -> Self {
        Self {
            game_id,
            features,
            cluster: None,
        }
    }
}
