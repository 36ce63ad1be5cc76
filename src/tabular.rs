// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

//! Tabular patient features and body-area one-hot encoding.
//!
//! The lesion classifier takes a second input alongside the image: a fixed
//! 9-slot vector of patient metadata. Slot order is dictated by the trained
//! network and must not change:
//!
//! | Slot | Meaning |
//! |------|---------|
//! | 0 | age |
//! | 1 | gender (0 = female, 1 = male) |
//! | 2 | maximum lesion diameter (standardized upstream) |
//! | 3 | minimum lesion diameter (standardized upstream) |
//! | 4–8 | body-area one-hot (see [`BodyArea`]) |

use ndarray::Array2;

/// Length of the tabular feature vector.
pub const TABULAR_LEN: usize = 9;

/// Body area where the lesion was photographed.
///
/// Any string that is not one of the four known categories falls back to
/// [`BodyArea::Other`], matching the training-time encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyArea {
    /// Anterior torso (chest, abdomen).
    AnteriorTorso,
    /// Head and neck.
    HeadNeck,
    /// Lower extremity (legs, feet).
    LowerExtremity,
    /// Posterior torso (back).
    PosteriorTorso,
    /// Any other or unrecognized area.
    Other,
}

impl BodyArea {
    /// Slot of this category in the tabular vector.
    #[must_use]
    pub const fn one_hot_index(self) -> usize {
        match self {
            Self::AnteriorTorso => 4,
            Self::HeadNeck => 5,
            Self::LowerExtremity => 6,
            Self::PosteriorTorso => 7,
            Self::Other => 8,
        }
    }

    /// Canonical string form, as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnteriorTorso => "anterior_torso",
            Self::HeadNeck => "head_neck",
            Self::LowerExtremity => "lower_extremity",
            Self::PosteriorTorso => "posterior_torso",
            Self::Other => "other",
        }
    }
}

impl From<&str> for BodyArea {
    fn from(s: &str) -> Self {
        match s {
            "anterior_torso" => Self::AnteriorTorso,
            "head_neck" => Self::HeadNeck,
            "lower_extremity" => Self::LowerExtremity,
            "posterior_torso" => Self::PosteriorTorso,
            _ => Self::Other,
        }
    }
}

/// Patient metadata for one prediction.
///
/// # Example
///
/// ```rust
/// use dermascan_inference::{BodyArea, TabularFeatures};
///
/// let features = TabularFeatures {
///     age: 45.0,
///     gender: 1,
///     max_diameter: 1.2,
///     min_diameter: 0.3,
///     area: BodyArea::HeadNeck,
/// };
/// let tab = features.to_array();
/// assert_eq!(tab.shape(), &[1, 9]);
/// assert_eq!(tab[[0, 5]], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabularFeatures {
    /// Patient age in years.
    pub age: f32,
    /// Gender flag: 1 for male, 0 for female.
    pub gender: u8,
    /// Maximum lesion diameter, standardized by the caller.
    pub max_diameter: f32,
    /// Minimum lesion diameter, standardized by the caller.
    pub min_diameter: f32,
    /// Body area of the lesion.
    pub area: BodyArea,
}

impl TabularFeatures {
    /// Encode the features as a batch-of-1 tabular input tensor.
    ///
    /// Exactly one of slots 4-8 is set to 1.
    #[must_use]
    pub fn to_array(&self) -> Array2<f32> {
        let mut tab = Array2::<f32>::zeros((1, TABULAR_LEN));
        tab[[0, 0]] = self.age;
        tab[[0, 1]] = f32::from(self.gender);
        tab[[0, 2]] = self.max_diameter;
        tab[[0, 3]] = self.min_diameter;
        tab[[0, self.area.one_hot_index()]] = 1.0;
        tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features_for(area: BodyArea) -> TabularFeatures {
        TabularFeatures {
            age: 45.0,
            gender: 1,
            max_diameter: 1.2,
            min_diameter: 0.3,
            area,
        }
    }

    #[test]
    fn test_area_from_str() {
        assert_eq!(BodyArea::from("anterior_torso"), BodyArea::AnteriorTorso);
        assert_eq!(BodyArea::from("head_neck"), BodyArea::HeadNeck);
        assert_eq!(BodyArea::from("lower_extremity"), BodyArea::LowerExtremity);
        assert_eq!(BodyArea::from("posterior_torso"), BodyArea::PosteriorTorso);
        assert_eq!(BodyArea::from("unknown_value"), BodyArea::Other);
        assert_eq!(BodyArea::from(""), BodyArea::Other);
        // Case-sensitive, like the original encoding
        assert_eq!(BodyArea::from("Head_Neck"), BodyArea::Other);
    }

    #[test]
    fn test_scalar_slots() {
        let tab = features_for(BodyArea::Other).to_array();
        assert_eq!(tab.shape(), &[1, TABULAR_LEN]);
        assert_eq!(tab[[0, 0]], 45.0);
        assert_eq!(tab[[0, 1]], 1.0);
        assert_eq!(tab[[0, 2]], 1.2);
        assert_eq!(tab[[0, 3]], 0.3);
    }

    #[test]
    fn test_one_hot_invariant() {
        // Exactly one of slots 4-8 is set, for every category
        for area in [
            BodyArea::AnteriorTorso,
            BodyArea::HeadNeck,
            BodyArea::LowerExtremity,
            BodyArea::PosteriorTorso,
            BodyArea::Other,
        ] {
            let tab = features_for(area).to_array();
            let one_hot_sum: f32 = (4..TABULAR_LEN).map(|i| tab[[0, i]]).sum();
            assert_eq!(one_hot_sum, 1.0, "area {area:?}");
            assert_eq!(tab[[0, area.one_hot_index()]], 1.0);
        }
    }

    #[test]
    fn test_head_neck_slot() {
        let tab = features_for(BodyArea::HeadNeck).to_array();
        assert_eq!(tab[[0, 5]], 1.0);
        for i in [4, 6, 7, 8] {
            assert_eq!(tab[[0, i]], 0.0);
        }
    }

    #[test]
    fn test_unknown_area_falls_back_to_other() {
        let tab = features_for(BodyArea::from("unknown_value")).to_array();
        assert_eq!(tab[[0, 8]], 1.0);
        for i in 4..8 {
            assert_eq!(tab[[0, i]], 0.0);
        }
    }
}
