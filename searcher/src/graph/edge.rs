/// An outgoing edge: the state it leads to, and the cost of taking it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<N> {
    destination: N,
    weight: usize,
}

impl<N> Edge<N> {
    pub fn new(destination: N, weight: usize) -> Self {
        Self {
            destination,
            weight,
        }
    }

    pub fn destination(&self) -> &N {
        &self.destination
    }

    pub fn weight(&self) -> usize {
        self.weight
    }
}
