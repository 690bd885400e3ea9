//! Macros for ergonomic state machine construction.

/// Declare a [`MachineConfig`](crate::core::MachineConfig) inline.
///
/// States keep the order they are written in. Each state lists its
/// `event => target` transitions; `{}` declares a state with none.
///
/// # Example
///
/// ```
/// use stepwise::machine_config;
///
/// let config = machine_config! {
///     initial: "red",
///     states: {
///         "red" => { "timer" => "green" },
///         "green" => { "timer" => "yellow" },
///         "yellow" => { "timer" => "red" },
///     }
/// };
///
/// assert_eq!(config.initial, "red");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $( $event:expr => $target:expr ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::StateTable::new();
        $(
            states.insert(
                $state,
                $crate::core::StateDefinition::new()
                    $( .with_transition($event, $target) )*,
            );
        )*
        $crate::core::MachineConfig::new($initial, states)
    }};
}
