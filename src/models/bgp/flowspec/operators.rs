use super::FlowSpecError;

/// Numeric operator for Flow-Spec components (RFC 8955 Section 4.2.1)
///
/// `end_of_list` is framing: the encoder sets it from the operator's position in its list,
/// so two operators that differ only in that bit compare equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericOperator {
    /// End-of-list flag (bit 7)
    pub end_of_list: bool,
    /// AND flag - true=AND with next, false=OR with next (bit 6)
    pub and_with_next: bool,
    /// Value length in octets (bits 5-4): 00=1, 01=2, 10=4, 11=8
    pub value_length: u8,
    /// Less-than comparison (bit 2)
    pub less_than: bool,
    /// Greater-than comparison (bit 1)
    pub greater_than: bool,
    /// Equal comparison (bit 0)
    pub equal: bool,
    /// The comparison value
    pub value: u64,
}

/// Bitmask operator for Flow-Spec components (RFC 8955 Section 4.2.2)
///
/// Equality ignores `end_of_list`, as for [NumericOperator].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitmaskOperator {
    /// End-of-list flag (bit 7)
    pub end_of_list: bool,
    /// AND flag - true=AND with next, false=OR with next (bit 6)
    pub and_with_next: bool,
    /// Value length in octets (bits 5-4): 00=1, 01=2, 10=4, 11=8
    pub value_length: u8,
    /// NOT flag - logical negation (bit 1)
    pub not: bool,
    /// Match flag - true=partial match, false=exact match (bit 0)
    pub match_flag: bool,
    /// The bitmask value
    pub bitmask: u64,
}

impl PartialEq for NumericOperator {
    fn eq(&self, other: &Self) -> bool {
        self.and_with_next == other.and_with_next
            && self.value_length == other.value_length
            && self.less_than == other.less_than
            && self.greater_than == other.greater_than
            && self.equal == other.equal
            && self.value == other.value
    }
}

impl Eq for NumericOperator {}

impl PartialEq for BitmaskOperator {
    fn eq(&self, other: &Self) -> bool {
        self.and_with_next == other.and_with_next
            && self.value_length == other.value_length
            && self.not == other.not
            && self.match_flag == other.match_flag
            && self.bitmask == other.bitmask
    }
}

impl Eq for BitmaskOperator {}

/// Value length in octets encoded in bits 5-4 of an operator byte.
pub(crate) const fn operator_value_length(operator_byte: u8) -> usize {
    1 << ((operator_byte >> 4) & 0x03)
}

/// Length bits for an operator byte; fails for lengths the wire format cannot express.
fn length_bits(value_length: u8) -> Result<u8, FlowSpecError> {
    match value_length {
        1 => Ok(0x00),
        2 => Ok(0x10),
        4 => Ok(0x20),
        8 => Ok(0x30),
        v => Err(FlowSpecError::InvalidValueLength(v)),
    }
}

/// Smallest operator value length that holds `value`.
const fn fitting_length(value: u64) -> u8 {
    if value <= 0xFF {
        1
    } else if value <= 0xFFFF {
        2
    } else if value <= 0xFFFFFFFF {
        4
    } else {
        8
    }
}

impl NumericOperator {
    /// Create a new numeric operator from raw byte and value
    pub fn from_byte_and_value(operator_byte: u8, value: u64) -> Result<Self, FlowSpecError> {
        // Bit 3 must be 0 for numeric operators
        if (operator_byte & 0x08) != 0 {
            return Err(FlowSpecError::InvalidOperator(operator_byte));
        }

        Ok(NumericOperator {
            end_of_list: (operator_byte & 0x80) != 0,
            and_with_next: (operator_byte & 0x40) != 0,
            value_length: operator_value_length(operator_byte) as u8,
            less_than: (operator_byte & 0x04) != 0,
            greater_than: (operator_byte & 0x02) != 0,
            equal: (operator_byte & 0x01) != 0,
            value,
        })
    }

    /// Convert to byte representation
    pub fn to_byte(&self) -> Result<u8, FlowSpecError> {
        let mut byte = length_bits(self.value_length)?;

        if self.end_of_list {
            byte |= 0x80;
        }
        if self.and_with_next {
            byte |= 0x40;
        }
        if self.less_than {
            byte |= 0x04;
        }
        if self.greater_than {
            byte |= 0x02;
        }
        if self.equal {
            byte |= 0x01;
        }

        Ok(byte)
    }

    fn with_flags(value: u64, less_than: bool, greater_than: bool, equal: bool) -> Self {
        NumericOperator {
            end_of_list: true,
            and_with_next: false,
            value_length: fitting_length(value),
            less_than,
            greater_than,
            equal,
            value,
        }
    }

    /// Create equality operator
    pub fn equal_to(value: u64) -> Self {
        Self::with_flags(value, false, false, true)
    }

    /// Create range operator (greater than or equal)
    pub fn greater_than_or_equal(value: u64) -> Self {
        Self::with_flags(value, false, true, true)
    }

    /// Create range operator (less than or equal)
    pub fn less_than_or_equal(value: u64) -> Self {
        Self::with_flags(value, true, false, true)
    }
}

impl BitmaskOperator {
    /// Create a new bitmask operator from raw byte and value
    pub fn from_byte_and_value(operator_byte: u8, bitmask: u64) -> Result<Self, FlowSpecError> {
        // Bits 3 and 2 must be 0 for bitmask operators
        if (operator_byte & 0x0C) != 0 {
            return Err(FlowSpecError::InvalidOperator(operator_byte));
        }

        Ok(BitmaskOperator {
            end_of_list: (operator_byte & 0x80) != 0,
            and_with_next: (operator_byte & 0x40) != 0,
            value_length: operator_value_length(operator_byte) as u8,
            not: (operator_byte & 0x02) != 0,
            match_flag: (operator_byte & 0x01) != 0,
            bitmask,
        })
    }

    /// Convert to byte representation
    pub fn to_byte(&self) -> Result<u8, FlowSpecError> {
        let mut byte = length_bits(self.value_length)?;

        if self.end_of_list {
            byte |= 0x80;
        }
        if self.and_with_next {
            byte |= 0x40;
        }
        if self.not {
            byte |= 0x02;
        }
        if self.match_flag {
            byte |= 0x01;
        }

        Ok(byte)
    }

    /// Create exact match operator
    pub fn exact_match(bitmask: u64) -> Self {
        BitmaskOperator {
            end_of_list: true,
            and_with_next: false,
            value_length: fitting_length(bitmask),
            not: false,
            match_flag: false,
            bitmask,
        }
    }

    /// Create partial match operator
    pub fn partial_match(bitmask: u64) -> Self {
        BitmaskOperator {
            match_flag: true,
            ..Self::exact_match(bitmask)
        }
    }
}
