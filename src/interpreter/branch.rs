/// How `IF`/`ENDIF` pairs are tracked during execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BranchMode {
    /// One frame per open `IF`; bodies nest correctly.
    #[default]
    Nested,
    /// A single skip flag: any `ENDIF` resumes execution and `IF` is ignored while skipping.
    Flat,
}

#[derive(Debug, Default)]
pub struct BranchState {
    mode: BranchMode,
    /// `flat` mode only.
    skipping: bool,
    /// `nested` mode only: outcome of each open `IF`.
    frames: Vec<bool>,
}

impl BranchState {
    pub fn new(mode: BranchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn is_skipping(&self) -> bool {
        match self.mode {
            BranchMode::Flat => self.skipping,
            BranchMode::Nested => self.frames.iter().any(|taken| !taken),
        }
    }

    /// Record an `IF` whose condition was evaluated to `taken`.
    pub fn enter(&mut self, taken: bool) {
        match self.mode {
            BranchMode::Flat => {
                if !taken {
                    self.skipping = true;
                }
            }
            BranchMode::Nested => self.frames.push(taken),
        }
    }

    /// Record an `IF` reached while already skipping; its condition is not evaluated.
    pub fn enter_skipped(&mut self) {
        if self.mode == BranchMode::Nested {
            self.frames.push(true);
        }
    }

    pub fn exit(&mut self) {
        match self.mode {
            BranchMode::Flat => self.skipping = false,
            BranchMode::Nested => {
                if self.frames.pop().is_none() {
                    log::debug!("ENDIF without an open IF ignored");
                }
            }
        }
    }
}
