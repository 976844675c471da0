mod impls;

pub use impls::InMemoryFeedbackRepository;
