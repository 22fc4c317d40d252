use crate::simulate::fighter::{Fighter, FighterType};
use crate::simulate::grid::{Grid2D, Location, neighbours};
use crate::simulate::rng::Rng64;

/// Strides used to walk the grid in a scrambled order each round.
const STRIDES: [usize; 8] = [48817, 58099, 89867, 105407, 126943, 200723, 221021, 231677];

/// How an attacker picks its defender among the four neighbours.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionAlgorithm {
    /// The neighbour the attacker is most effective against.
    #[default]
    WeakestNeighbour,
    /// Any neighbour, uniformly.
    RandomNeighbour,
}

/// A grid of fighters of one family.
pub struct Battle<K> {
    fighters: Grid2D<Fighter<K>>,
    rng: Rng64,
    selection: SelectionAlgorithm,
    fight_own: bool,
}

impl<K: FighterType> Battle<K> {
    /// Seed a `width x height` grid with random fighters.
    ///
    /// Unless `fight_own` is set, attackers only consider neighbours of another type.
    pub fn new(
        width: usize,
        height: usize,
        selection: SelectionAlgorithm,
        fight_own: bool,
        mut rng: Rng64,
    ) -> Self {
        let fighters = Grid2D::new_with(width, height, || Fighter::random(&mut rng));
        Self {
            fighters,
            rng,
            selection,
            fight_own,
        }
    }

    /// Build a battle from an explicit grid.
    pub fn from_grid(
        fighters: Grid2D<Fighter<K>>,
        selection: SelectionAlgorithm,
        fight_own: bool,
        rng: Rng64,
    ) -> Self {
        Self {
            fighters,
            rng,
            selection,
            fight_own,
        }
    }

    /// The current grid.
    pub fn fighters(&self) -> &Grid2D<Fighter<K>> {
        &self.fighters
    }

    /// Run one round: every cell attacks once, in a scrambled order. Returns the number of
    /// defenders that died (and changed sides).
    pub fn step(&mut self) -> u64 {
        let (w, _) = self.fighters.size();
        let count = self.fighters.count();
        if count == 0 {
            return 0;
        }

        let start = self.rng.below(count);
        let stride = STRIDES[self.rng.below(STRIDES.len())];
        let mut current = start;
        let mut deaths = 0;

        loop {
            let attacker = (current % w, current / w);
            if let Some(defender) = self.select_defender(attacker)
                && self.fight(attacker, defender)
            {
                deaths += 1;
            }

            current = (current + stride) % count;
            if current == start {
                break;
            }
        }
        deaths
    }

    /// Let the fighter at `attacker` attack the one at `defender`. Returns whether the defender
    /// died; `false` if the two locations are the same cell or outside the grid.
    pub fn fight(&mut self, attacker: Location, defender: Location) -> bool {
        match self.fighters.get_pair_mut(attacker, defender) {
            Some((a, d)) => a.fight(d, &mut self.rng),
            None => false,
        }
    }

    /// Pick the defender for the fighter at `origin`, per the configured selection.
    pub fn select_defender(&mut self, origin: Location) -> Option<Location> {
        let fighter = self.fighters.get(origin)?;
        let fight_own = self.fight_own;
        let candidates = neighbours(origin, self.fighters.size())
            .into_iter()
            .filter_map(|loc| self.fighters.get(loc).map(|f| (f, loc)))
            .filter(|(f, _)| fight_own || fighter.should_fight(f));

        match self.selection {
            SelectionAlgorithm::WeakestNeighbour => candidates
                .max_by_key(|(f, _)| fighter.effectiveness(f))
                .map(|(_, loc)| loc),
            SelectionAlgorithm::RandomNeighbour => {
                let locs: Vec<Location> = candidates.map(|(_, loc)| loc).collect();
                self.rng.choose(locs)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/simulate/battle.rs"]
mod tests;
