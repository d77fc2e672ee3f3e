mod greedy;

pub use greedy::GreedySelector;
