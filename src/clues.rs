//! Clue Registry
//!
//! The fixed list of fifteen riddles. The first letter of each riddle's answer,
//! read in id order, spells the question whose answer unlocks the archive.

pub mod placement;

use serde::Serialize;
use std::fmt;

pub use placement::{verify_placement, PlacementReport};

/// Number of clues hidden in the file system
pub const CLUE_COUNT: usize = 15;

/// ClueId: position of a clue in the acrostic, always within 1..=15
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClueId(u8);

impl ClueId {
    /// Returns `None` when `id` is outside 1..=15.
    pub fn new(id: u32) -> Option<Self> {
        if (1..=CLUE_COUNT as u32).contains(&id) {
            Some(ClueId(id as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// Zero-based index into answer arrays
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    pub fn all() -> impl Iterator<Item = ClueId> {
        (1..=CLUE_COUNT as u8).map(ClueId)
    }
}

impl fmt::Display for ClueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One riddle and the file name it hides under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    pub id: ClueId,
    pub filename: &'static str,
    pub riddle: &'static str,
}

const fn clue(id: u8, filename: &'static str, riddle: &'static str) -> Clue {
    Clue {
        id: ClueId(id),
        filename,
        riddle,
    }
}

static CLUES: [Clue; CLUE_COUNT] = [
    clue(1, "Sys_Compiler.log", "1. The step-by-step translation of source code into machine code is called ____."),
    clue(2, "Eq_Solver.md", "2. If an equation has exactly one solution, the solution is called ____."),
    clue(3, "Frontend_Framework.js", "3. I am the 'R'—a JavaScript library used for building user interfaces."),
    clue(4, "CPU_Architecture.txt", "4. In Computer Architecture, I am a small, extremely fast storage location inside the CPU."),
    clue(5, "Elevation_Data.csv", "5. It is the tallest mountain on Earth (measured from sea level)."),
    clue(6, "Pointer_Exception.log", "6. In databases, this is a special marker used to indicate that a data value does not exist."),
    clue(7, "Global_Entity.txt", "7. What can you find in every City, every Country, and every Continent, but never in a village?"),
    clue(8, "Web_Archive_90s.txt", "8. This early internet giant was once the most popular search engine before Google."),
    clue(9, "Kernel_Init.txt", "9. I am the fundamental software that manages hardware and provides common services."),
    clue(10, "Table_Constraint.sql", "10. In DBMS, I am a key used to link two tables together."),
    clue(11, "Astro_Observation.txt", "11. I am the largest planet in our solar system, famous for my 'Great Red Spot.'"),
    clue(12, "Landmass_Record.csv", "12. This is the largest continent on Earth."),
    clue(13, "Solution_Acidity.log", "13. This is the unit used to measure the acidity or alkalinity of a solution."),
    clue(14, "Quantum_State.txt", "14. I am the fundamental building block of all matter."),
    clue(15, "Boolean_Gate.cfg", "15. In a CPU, which basic logic gate outputs 'True' only if both its inputs are 'False'?"),
];

/// Read-only access to the fixed clue list
#[derive(Debug, Clone, Copy, Default)]
pub struct ClueRegistry;

impl ClueRegistry {
    pub fn new() -> Self {
        ClueRegistry
    }

    /// All clues in id order
    pub fn all(&self) -> &'static [Clue] {
        &CLUES
    }

    pub fn get(&self, id: ClueId) -> &'static Clue {
        &CLUES[id.index()]
    }
}

/// Look up a clue by its numeric id.
pub fn get_clue(id: u32) -> Option<&'static Clue> {
    ClueId::new(id).map(|id| ClueRegistry.get(id))
}
