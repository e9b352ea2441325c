//! qm7-test-data
//!
//! Small molecular view batches embedded in the crate for use in testing.
//!
//! Each fixture is a JSON document with a `shape` of
//! `[molecule, view, flat_feature]` and the row-major `data`, in the same
//! layout as raw QM7 views: `[Z, x, y, z]` per atom with `Z == 0` padding.
//!
//! ```
//! use qm7_test_data::TestViews;
//! let views = TestViews::methane_01().load().unwrap();
//! assert_eq!(views.dim(), (1, 2, 24));
//! ```
use anyhow::{ensure, Context, Result};
use ndarray::Array3;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ViewFixture {
    name: String,
    shape: [usize; 3],
    data: Vec<f32>,
}

#[derive(Debug)]
pub struct TestViews {
    json: &'static str,
}

impl TestViews {
    /// Methane, 2 views. The second view is the first translated by +1 along x.
    /// Six atom slots, the last one padding.
    pub fn methane_01() -> Self {
        Self {
            json: include_str!("../data/methane_views.json"),
        }
    }

    /// Water (O, H, H) and hydrogen sulfide (S, H, H), one view each.
    pub fn water_h2s_01() -> Self {
        Self {
            json: include_str!("../data/water_h2s_views.json"),
        }
    }

    /// Raw `[molecule, view, flat_feature]` views.
    pub fn load(&self) -> Result<Array3<f32>> {
        let fixture = self.parse()?;
        let [molecules, views, width] = fixture.shape;
        ensure!(
            molecules * views * width == fixture.data.len(),
            "fixture '{}' has {} values for shape {:?}",
            fixture.name,
            fixture.data.len(),
            fixture.shape
        );
        Ok(Array3::from_shape_vec((molecules, views, width), fixture.data)?)
    }

    fn parse(&self) -> Result<ViewFixture> {
        serde_json::from_str(self.json).context("parsing embedded view fixture")
    }
}
