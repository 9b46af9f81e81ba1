//! Population with a parallel fitness cache.

/// An ordered set of candidates plus the fitness of each, indexed in
/// parallel.
///
/// Cache slots hold `f64::NEG_INFINITY` until the member at that index has
/// been evaluated. Replacing the members resets the cache.
///
/// # Examples
///
/// ```
/// use u_tworoute::ga::Population;
///
/// let mut pop = Population::new(vec!["a", "bbb", "cc"]);
/// assert_eq!(pop.fitness(0), f64::NEG_INFINITY);
///
/// pop.evaluate_with(|s| s.len() as f64);
/// pop.refresh_fitness_sum();
/// assert_eq!(pop.best_index(), Some(1));
/// assert_eq!(pop.fitness_sum(), 6.0);
/// assert_eq!(pop.first_reaching(2.0), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Population<I> {
    members: Vec<I>,
    fitness_cache: Vec<f64>,
    fitness_sum: f64,
}

impl<I> Population<I> {
    /// Wraps the given members; nothing is evaluated yet.
    pub fn new(members: Vec<I>) -> Self {
        let n = members.len();
        Self {
            members,
            fitness_cache: vec![f64::NEG_INFINITY; n],
            fitness_sum: f64::NEG_INFINITY,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[I] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [I] {
        &mut self.members
    }

    /// Cached fitness of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn fitness(&self, index: usize) -> f64 {
        self.fitness_cache[index]
    }

    pub fn fitness_cache(&self) -> &[f64] {
        &self.fitness_cache
    }

    /// Sum of the cache as of the last [`refresh_fitness_sum`](Self::refresh_fitness_sum).
    pub fn fitness_sum(&self) -> f64 {
        self.fitness_sum
    }

    /// Mean cached fitness as of the last refresh.
    pub fn average_fitness(&self) -> f64 {
        if self.members.is_empty() {
            return f64::NEG_INFINITY;
        }
        self.fitness_sum / self.members.len() as f64
    }

    /// Evaluates every member, writing each score into its cache slot.
    pub fn evaluate_with<F: FnMut(&I) -> f64>(&mut self, mut evaluate: F) {
        for (slot, member) in self.fitness_cache.iter_mut().zip(&self.members) {
            *slot = evaluate(member);
        }
    }

    /// Recomputes the fitness sum from the cache.
    pub fn refresh_fitness_sum(&mut self) {
        self.fitness_sum = self.fitness_cache.iter().sum();
    }

    /// Index of the highest cached fitness; ties go to the lowest index.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &f) in self.fitness_cache.iter().enumerate() {
            match best {
                Some(b) if f <= self.fitness_cache[b] => {}
                Some(_) if f.is_nan() => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Index of the first member whose cached fitness is at least `threshold`.
    pub fn first_reaching(&self, threshold: f64) -> Option<usize> {
        self.fitness_cache.iter().position(|&f| f >= threshold)
    }

    /// Replaces all members and invalidates the cache.
    pub fn replace(&mut self, members: Vec<I>) {
        self.fitness_cache = vec![f64::NEG_INFINITY; members.len()];
        self.members = members;
    }
}
