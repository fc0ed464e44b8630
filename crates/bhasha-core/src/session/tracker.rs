//! Adaptive Complexity Tracking
//!
//! Keeps whole-session exchange and success counters and, at fixed
//! checkpoints, moves a three-level complexity dial:
//!
//! - success rate above the raise threshold: too easy, step the level up
//! - success rate below the lower threshold: too hard, step the level down
//! - in between: hold steady (the comprehensible-input i+1 zone)
//!
//! The caller decides what counts as a successful turn; this module only
//! aggregates the booleans it is handed.

use serde::{Deserialize, Serialize};

// ============================================================================
// COMPLEXITY LEVELS
// ============================================================================

/// Discrete difficulty tier applied to generated tutor language
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    /// Level 1 - present tense, top-500 vocabulary, heavy repetition
    #[default]
    Beginner,
    /// Level 2 - past/future tenses, broader vocabulary, longer sentences
    Intermediate,
    /// Level 3 - complex grammar, idioms, native speed
    Advanced,
}

impl ComplexityLevel {
    /// Numeric level (1-3)
    pub fn as_u8(self) -> u8 {
        match self {
            ComplexityLevel::Beginner => 1,
            ComplexityLevel::Intermediate => 2,
            ComplexityLevel::Advanced => 3,
        }
    }

    /// Parse from a numeric level, if in range
    pub fn from_u8(n: u8) -> Option<Self> {
        match n {
            1 => Some(ComplexityLevel::Beginner),
            2 => Some(ComplexityLevel::Intermediate),
            3 => Some(ComplexityLevel::Advanced),
            _ => None,
        }
    }

    /// One step up, clamped at `Advanced`
    pub fn raised(self) -> Self {
        match self {
            ComplexityLevel::Beginner => ComplexityLevel::Intermediate,
            ComplexityLevel::Intermediate | ComplexityLevel::Advanced => {
                ComplexityLevel::Advanced
            }
        }
    }

    /// One step down, clamped at `Beginner`
    pub fn lowered(self) -> Self {
        match self {
            ComplexityLevel::Advanced => ComplexityLevel::Intermediate,
            ComplexityLevel::Intermediate | ComplexityLevel::Beginner => {
                ComplexityLevel::Beginner
            }
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Beginner => "beginner",
            ComplexityLevel::Intermediate => "intermediate",
            ComplexityLevel::Advanced => "advanced",
        }
    }

    /// Per-level tutor guidance, embedded verbatim by the prompt-building
    /// collaborator
    pub fn guidance(self) -> &'static str {
        match self {
            ComplexityLevel::Beginner => {
                "BEGINNER LEVEL:\n\
                 - Use ONLY present tense, simple sentences (3-7 words)\n\
                 - High-frequency vocabulary (top 500 most common words)\n\
                 - Lots of repetition - recycle the same words in different sentences\n\
                 - Examples: greetings, numbers, colors, basic actions"
            }
            ComplexityLevel::Intermediate => {
                "INTERMEDIATE LEVEL:\n\
                 - Introduce past and future tenses\n\
                 - Broader vocabulary (500-2000 common words)\n\
                 - Longer sentences with simple clauses\n\
                 - More varied expressions\n\
                 - Ask questions that require explanations, not just yes/no"
            }
            ComplexityLevel::Advanced => {
                "ADVANCED LEVEL:\n\
                 - Complex grammar structures, conditional sentences\n\
                 - Full vocabulary range including idioms\n\
                 - Natural native speaking speed\n\
                 - Sophisticated expressions and cultural references\n\
                 - Discuss abstract topics and opinions"
            }
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ComplexityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(ComplexityLevel::Beginner),
            "intermediate" => Ok(ComplexityLevel::Intermediate),
            "advanced" => Ok(ComplexityLevel::Advanced),
            _ => Err(format!("Unknown complexity level: {}", s)),
        }
    }
}

// ============================================================================
// TRACKER CONFIG
// ============================================================================

/// Tunable knobs for complexity adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Exchanges between complexity re-evaluations
    pub checkpoint_interval: u32,
    /// Whole-session success rate above which the level steps up
    pub raise_threshold: f64,
    /// Whole-session success rate below which the level steps down
    pub lower_threshold: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            checkpoint_interval: 5,
            raise_threshold: 0.8,
            lower_threshold: 0.5,
        }
    }
}

// ============================================================================
// ADJUSTMENT DECISIONS
// ============================================================================

/// Direction decided at a checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Step difficulty up
    Increase,
    /// Step difficulty down
    Decrease,
    /// Hold steady
    #[default]
    Maintain,
}

impl Direction {
    /// Natural-language instruction consumed by the prompt-building
    /// collaborator
    pub fn instruction(self) -> &'static str {
        match self {
            Direction::Increase => "increase vocabulary sophistication and sentence length",
            Direction::Decrease => {
                "simplify: shorter sentences, basic vocabulary, more repetition"
            }
            Direction::Maintain => "maintain current complexity",
        }
    }
}

/// Outcome of a complexity re-evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    /// Level in effect after the decision
    pub level: ComplexityLevel,
    /// Which way the checkpoint moved (or held) the dial
    pub direction: Direction,
}

impl Adjustment {
    /// Instruction string for the prompt-building collaborator
    pub fn instruction(&self) -> &'static str {
        self.direction.instruction()
    }
}

// ============================================================================
// PERFORMANCE TRACKER
// ============================================================================

/// Per-session performance record driving adaptive difficulty
///
/// Ephemeral: created when a scenario starts, discarded when the session
/// ends. Invariant: `success_count <= exchange_count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTracker {
    config: TrackerConfig,
    exchange_count: u32,
    success_count: u32,
    struggle_count: u32,
    level: ComplexityLevel,
    last_direction: Direction,
}

impl Default for PerformanceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceTracker {
    /// Create a tracker with default thresholds, starting at beginner level
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            config,
            exchange_count: 0,
            success_count: 0,
            struggle_count: 0,
            level: ComplexityLevel::Beginner,
            last_direction: Direction::Maintain,
        }
    }

    /// Record one user turn
    pub fn record_turn(&mut self, was_successful: bool) {
        self.exchange_count += 1;
        if was_successful {
            self.success_count += 1;
        } else {
            self.struggle_count += 1;
        }
    }

    /// Re-evaluate complexity; call after every `record_turn`.
    ///
    /// Off-checkpoint calls are no-ops that return the current level with a
    /// maintain instruction. At a checkpoint the decision uses the
    /// whole-session success rate, not a sliding window. Clamping at the
    /// level boundaries is idempotent.
    pub fn maybe_adjust(&mut self) -> Adjustment {
        // A zero interval disables checkpoints entirely
        if self.exchange_count == 0
            || self.config.checkpoint_interval == 0
            || self.exchange_count % self.config.checkpoint_interval != 0
        {
            self.last_direction = Direction::Maintain;
            return Adjustment {
                level: self.level,
                direction: Direction::Maintain,
            };
        }

        let rate = self.success_rate();
        let direction = if rate > self.config.raise_threshold {
            let next = self.level.raised();
            if next != self.level {
                tracing::info!(from = %self.level, to = %next, rate, "increasing complexity");
            }
            self.level = next;
            Direction::Increase
        } else if rate < self.config.lower_threshold {
            let next = self.level.lowered();
            if next != self.level {
                tracing::info!(from = %self.level, to = %next, rate, "decreasing complexity");
            }
            self.level = next;
            Direction::Decrease
        } else {
            // 50-80% is the ideal i+1 zone
            Direction::Maintain
        };

        self.last_direction = direction;
        Adjustment {
            level: self.level,
            direction,
        }
    }

    /// Current complexity level
    pub fn level(&self) -> ComplexityLevel {
        self.level
    }

    /// Direction decided at the most recent evaluation
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Turns recorded this session
    pub fn exchange_count(&self) -> u32 {
        self.exchange_count
    }

    /// Turns marked successful
    pub fn success_count(&self) -> u32 {
        self.success_count
    }

    /// Turns marked unsuccessful
    pub fn struggle_count(&self) -> u32 {
        self.struggle_count
    }

    /// Whole-session success rate; 0.0 before the first turn
    pub fn success_rate(&self) -> f64 {
        if self.exchange_count == 0 {
            return 0.0;
        }
        f64::from(self.success_count) / f64::from(self.exchange_count)
    }

    /// Performance statistics view
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            exchanges: self.exchange_count,
            successful: self.success_count,
            struggled: self.struggle_count,
            complexity: self.level.as_u8(),
            success_rate: self.success_rate(),
        }
    }
}

/// Performance statistics for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    /// Turns recorded
    pub exchanges: u32,
    /// Turns marked successful
    pub successful: u32,
    /// Turns marked unsuccessful
    pub struggled: u32,
    /// Numeric complexity level (1-3)
    pub complexity: u8,
    /// Whole-session success rate
    pub success_rate: f64,
}

// ============================================================================
// TESTS
// ============================================================================
