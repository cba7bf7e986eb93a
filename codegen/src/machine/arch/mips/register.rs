use crate::register::Register;

/// The general purpose registers touched by generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralPurpose {
    /// Hardwired to zero.
    Zero,
    /// Holds the first parameter of `wain`.
    FirstParam,
    /// Holds the second parameter of `wain`.
    SecondParam,
    /// Holds the value handed back to the caller.
    Result,
    ReturnAddress,
}

impl GeneralPurpose {
    /// Returns the register a parameter is passed in, by its declaration
    /// position.
    pub fn parameter(position: usize) -> Option<Self> {
        match position {
            0 => Some(Self::FirstParam),
            1 => Some(Self::SecondParam),
            _ => None,
        }
    }
}

impl Register for GeneralPurpose {
    fn id(&self) -> &'static str {
        match self {
            Self::Zero => "$0",
            Self::FirstParam => "$1",
            Self::SecondParam => "$2",
            Self::Result => "$3",
            Self::ReturnAddress => "$31",
        }
    }
}

impl core::fmt::Display for GeneralPurpose {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pass_parameters_in_declaration_order() {
        assert_eq!(Some(GeneralPurpose::FirstParam), GeneralPurpose::parameter(0));
        assert_eq!(Some(GeneralPurpose::SecondParam), GeneralPurpose::parameter(1));
        assert_eq!(None, GeneralPurpose::parameter(2));
    }

    #[test]
    fn should_format_registers_with_a_sigil() {
        assert_eq!("$0", GeneralPurpose::Zero.to_string());
        assert_eq!("$31", GeneralPurpose::ReturnAddress.to_string());
    }
}
