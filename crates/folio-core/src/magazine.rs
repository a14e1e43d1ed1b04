//! Magazine themes, page flipping and wrap-around carousels.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Magazine {
    Vague,
    Engineer,
    Smoke,
}

impl Magazine {
    pub const ALL: [Magazine; 3] = [Magazine::Vague, Magazine::Engineer, Magazine::Smoke];

    pub fn name(self) -> &'static str {
        match self {
            Magazine::Vague => "Vague",
            Magazine::Engineer => "Engineer",
            Magazine::Smoke => "Smoke",
        }
    }

    pub fn page_count(self) -> usize {
        match self {
            Magazine::Vague => 6,
            Magazine::Engineer => 6,
            Magazine::Smoke => 4,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }
}

/// `index + delta` wrapped into `0..len`. Zero when `len` is zero.
pub fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((index as isize % len + delta % len + len) % len) as usize
}

/// Which magazine is in front; navigation wraps in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MagazineNav {
    current: Magazine,
}

impl Default for MagazineNav {
    fn default() -> Self {
        Self {
            current: Magazine::Vague,
        }
    }
}

impl MagazineNav {
    pub fn new(current: Magazine) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Magazine {
        self.current
    }

    pub fn step(&mut self, delta: isize) -> Magazine {
        let i = wrap_index(self.current.index(), delta, Magazine::ALL.len());
        self.current = Magazine::ALL[i];
        self.current
    }

    pub fn next(&mut self) -> Magazine {
        self.step(1)
    }

    pub fn previous(&mut self) -> Magazine {
        self.step(-1)
    }

    pub fn set(&mut self, magazine: Magazine) {
        self.current = magazine;
    }
}

/// Page-flip state of one magazine. `current` counts flipped pages, so a
/// book of N pages rests in N+1 states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBook {
    page_count: usize,
    current: usize,
}

impl PageBook {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            current: 0,
        }
    }

    pub fn for_magazine(magazine: Magazine) -> Self {
        Self::new(magazine.page_count())
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns true if a page actually turned.
    pub fn flip_forward(&mut self) -> bool {
        if self.current < self.page_count {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn flip_back(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_closed(&self) -> bool {
        self.current == 0
    }

    pub fn is_finished(&self) -> bool {
        self.current == self.page_count
    }

    pub fn close(&mut self) {
        self.current = 0;
    }
}

/// A wrap-around carousel of `len` description cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DescriptionCarousel {
    len: usize,
    index: usize,
}

impl DescriptionCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = wrap_index(self.index, 1, self.len);
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = wrap_index(self.index, -1, self.len);
        self.index
    }
}
