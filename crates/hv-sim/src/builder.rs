//! Fluent builder for constructing a [`Sim`].

use hv_agents::{Harvester, TransportCart};
use hv_core::{CartConfig, FieldConfig, RandomSource, RunConfig, SimConfig, SimRng};
use hv_telemetry::{BaseStation, TelemetrySink};

use crate::{Sim, SimResult, SimState};

/// Fluent builder for [`Sim<S, G>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, tick duration, seed
/// - `S: TelemetrySink` — where harvester snapshots go (e.g. [`BaseStation`])
/// - `G: RandomSource` — fill and unload-time randomness (e.g. [`SimRng`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                   |
/// |-----------------|---------------------------|
/// | `.field(c)`     | `FieldConfig::default()`  |
/// | `.cart(c)`      | `CartConfig::default()`   |
///
/// The cart is always parked at the field origin, and approaches at the
/// harvester's step size.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, BaseStation::new(), SimRng::new(7))
///     .field(field)
///     .cart(cart)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: TelemetrySink, G: RandomSource> {
    config: SimConfig,
    field:  Option<FieldConfig>,
    cart:   Option<CartConfig>,
    sink:   S,
    rng:    G,
}

impl<S: TelemetrySink, G: RandomSource> SimBuilder<S, G> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, sink: S, rng: G) -> Self {
        Self {
            config,
            field: None,
            cart: None,
            sink,
            rng,
        }
    }

    /// Supply the field geometry and harvester parameters.
    pub fn field(mut self, field: FieldConfig) -> Self {
        self.field = Some(field);
        self
    }

    /// Supply the cart parameters.
    pub fn cart(mut self, cart: CartConfig) -> Self {
        self.cart = Some(cart);
        self
    }

    /// Validate every configuration part, place both vehicles at the field
    /// origin, and return a ready-to-run [`Sim`] in `Harvesting`.
    ///
    /// # Errors
    ///
    /// `SimError::Agent(HvError::InvalidConfiguration(_))` for any invalid
    /// parameter.
    pub fn build(self) -> SimResult<Sim<S, G>> {
        self.config.validate()?;
        let field = self.field.unwrap_or_default();
        let cart = self.cart.unwrap_or_default();

        let harvester = Harvester::new(&field)?;
        let cart = TransportCart::new(field.origin, field.step_size, &cart)?;

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            harvester,
            cart,
            sink: self.sink,
            rng: self.rng,
            state: SimState::Harvesting,
            service_cycles: 0,
        })
    }
}

impl SimBuilder<BaseStation, SimRng> {
    /// Builder with the standard [`BaseStation`] and a [`SimRng`] seeded from
    /// `config.seed`.
    pub fn seeded(config: SimConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self::new(config, BaseStation::new(), rng)
    }

    /// Seeded builder from a complete [`RunConfig`].
    pub fn from_run_config(run: RunConfig) -> Self {
        Self::seeded(run.sim).field(run.field).cart(run.cart)
    }
}
