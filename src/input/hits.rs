use crate::player::{BarGeometry, FavoriteTarget};

/// Transport buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    Previous,
    PlayPause,
    Next,
    Shuffle,
    Repeat,
    Mute,
}

/// What a pointer press landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Target {
    ProgressBar,
    VolumeBar,
    Control(Control),
    Entry(usize),
    Favorite(FavoriteTarget),
    SearchField,
}

/// An axis-aligned clickable area, in pointer coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }

    pub fn bar(&self) -> BarGeometry {
        BarGeometry {
            left: self.left,
            width: self.width,
        }
    }
}

/// Clickable regions of the last drawn frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Region, Target)>,
}

impl HitMap {
    pub fn push(&mut self, region: Region, target: Target) {
        self.regions.push((region, target));
    }

    /// Topmost target under the pointer. Later pushes sit on top.
    pub fn target_at(&self, x: f64, y: f64) -> Option<(Region, Target)> {
        self.regions
            .iter()
            .rev()
            .find(|(r, _)| r.contains(x, y))
            .copied()
    }

    #[cfg(test)]
    pub(crate) fn region_of(&self, target: Target) -> Option<Region> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(r, _)| *r)
    }
}
