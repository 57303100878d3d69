use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers. The search only stops once its solution is
/// certified optimal.
#[derive(Clone, Copy, Debug)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
