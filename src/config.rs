use serde::{Deserialize, Serialize};

use crate::rule::RuleKind;
use crate::seed::Block;

/// All tunable parameters of a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Params {
    pub kind: RuleKind,
    pub width: usize,
    pub height: usize,

    // Seeding
    pub seed: u64,
    pub glider_origin: (i32, i32),
    pub block_origin: (i32, i32),
    pub block_size: (usize, usize),

    // Driver
    pub steps_per_tick: usize,
    pub parallel: bool,
    pub cell_size: usize,
}

impl Params {
    /// Defaults for each rule: 15x10 Life with a glider in the corner, or
    /// 45x30 Lifelike with a random 4x4 block in the middle stepped twice per
    /// tick to hide its period-2 flicker.
    pub fn for_kind(kind: RuleKind) -> Self {
        match kind {
            RuleKind::Life => Self {
                kind,
                width: 15,
                height: 10,
                seed: 1,
                glider_origin: (0, 0),
                block_origin: (0, 0),
                block_size: (0, 0),
                steps_per_tick: 1,
                parallel: false,
                cell_size: 25,
            },
            RuleKind::Lifelike => {
                let (width, height) = (45, 30);
                let block_size = (4, 4);
                Self {
                    kind,
                    width,
                    height,
                    seed: 1,
                    glider_origin: (0, 0),
                    block_origin: centered_origin(width, height, block_size),
                    block_size,
                    steps_per_tick: 2,
                    parallel: false,
                    cell_size: 10,
                }
            }
        }
    }

    pub fn block(&self) -> Block {
        Block {
            x: self.block_origin.0,
            y: self.block_origin.1,
            w: self.block_size.0,
            h: self.block_size.1,
        }
    }
}

/// Top-left corner that centers a block of `size` in a `width`x`height` grid.
pub fn centered_origin(width: usize, height: usize, size: (usize, usize)) -> (i32, i32) {
    (
        (width / 2) as i32 - (size.0 / 2) as i32,
        (height / 2) as i32 - (size.1 / 2) as i32,
    )
}

impl Default for Params {
    fn default() -> Self {
        Self::for_kind(RuleKind::default())
    }
}

/// Partial parameters read from a JSON file; unset fields keep the
/// defaults of the chosen rule.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsOverride {
    pub kind: Option<RuleKind>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub seed: Option<u64>,
    pub glider_origin: Option<(i32, i32)>,
    pub block_origin: Option<(i32, i32)>,
    pub block_size: Option<(usize, usize)>,
    pub steps_per_tick: Option<usize>,
    pub parallel: Option<bool>,
    pub cell_size: Option<usize>,
}

impl ParamsOverride {
    /// Resolve against the defaults of `kind`, or of `self.kind` when set.
    pub fn resolve(self, kind: RuleKind) -> Params {
        let defaults = Params::for_kind(self.kind.unwrap_or(kind));
        let width = self.width.unwrap_or(defaults.width);
        let height = self.height.unwrap_or(defaults.height);
        let block_size = self.block_size.unwrap_or(defaults.block_size);
        // An unset origin keeps the block centered in the resized grid.
        let block_origin = match (self.block_origin, defaults.kind) {
            (Some(origin), _) => origin,
            (None, RuleKind::Lifelike) => centered_origin(width, height, block_size),
            (None, RuleKind::Life) => defaults.block_origin,
        };
        Params {
            kind: defaults.kind,
            width,
            height,
            seed: self.seed.unwrap_or(defaults.seed),
            glider_origin: self.glider_origin.unwrap_or(defaults.glider_origin),
            block_origin,
            block_size,
            steps_per_tick: self.steps_per_tick.unwrap_or(defaults.steps_per_tick),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            cell_size: self.cell_size.unwrap_or(defaults.cell_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let life = Params::default();
        assert_eq!(life.kind, RuleKind::Life);
        assert_eq!((life.width, life.height), (15, 10));
        assert_eq!(life.steps_per_tick, 1);

        let lifelike = Params::for_kind(RuleKind::Lifelike);
        assert_eq!((lifelike.width, lifelike.height), (45, 30));
        assert_eq!(lifelike.seed, 1);
        assert_eq!(lifelike.block(), Block { x: 20, y: 13, w: 4, h: 4 });
        assert_eq!(lifelike.steps_per_tick, 2);
    }

    #[test]
    fn test_override_from_json() {
        let json = r#"{ "kind": "lifelike", "seed": 7, "parallel": true }"#;
        let over: ParamsOverride = serde_json::from_str(json).unwrap();
        let params = over.resolve(RuleKind::Life);
        assert_eq!(params.kind, RuleKind::Lifelike);
        assert_eq!(params.seed, 7);
        assert!(params.parallel);
        assert_eq!(params.width, 45);
        assert_eq!(params.steps_per_tick, 2);
    }

    #[test]
    fn test_empty_override_keeps_defaults() {
        let over: ParamsOverride = serde_json::from_str("{}").unwrap();
        assert_eq!(over.resolve(RuleKind::Lifelike), Params::for_kind(RuleKind::Lifelike));
    }

    #[test]
    fn test_resized_grid_recenters_block() {
        let json = r#"{ "width": 20, "height": 12 }"#;
        let over: ParamsOverride = serde_json::from_str(json).unwrap();
        let params = over.resolve(RuleKind::Lifelike);
        assert_eq!(params.block(), Block { x: 8, y: 4, w: 4, h: 4 });

        let json = r#"{ "width": 20, "block_size": [6, 2] }"#;
        let over: ParamsOverride = serde_json::from_str(json).unwrap();
        assert_eq!(over.resolve(RuleKind::Lifelike).block_origin, (7, 14));

        let json = r#"{ "width": 20, "block_origin": [1, 2] }"#;
        let over: ParamsOverride = serde_json::from_str(json).unwrap();
        assert_eq!(over.resolve(RuleKind::Lifelike).block_origin, (1, 2));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<ParamsOverride>(r#"{ "colour": 3 }"#).is_err());
    }
}
