/// ProgressReporter port for reporting progress during a run
///
/// Progress goes to a side channel (stderr) so it never mixes with the
/// report itself.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through the resolved systems
    ///
    /// # Arguments
    /// * `current` - Number of systems processed so far
    /// * `total` - Number of systems resolved
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
