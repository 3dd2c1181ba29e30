//! # Instruction Records
//!
//! This module defines the value type the upstream bytecode decoder hands to
//! instruction selection: one record per decoded high-level instruction.
//! Records carry no encoding logic; they are plain data consumed by the
//! selection stage and then discarded.

/// Semantic opcode of a decoded high-level instruction.
///
/// These identify operations from the managed bytecode the upstream
/// translator decodes, not 6502 opcodes. Which operand field of
/// [`IlInstruction`] is meaningful depends on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IlOpcode {
    /// No operation.
    Nop,

    /// Push an integer constant (integer operand).
    LdcI4,

    /// Push a string literal (string operand).
    LdStr,

    /// Load a local variable (integer operand: slot index).
    Ldloc,

    /// Store to a local variable (integer operand: slot index).
    Stloc,

    /// Load a static field (string operand: field name).
    Ldsfld,

    /// Store to a static field (string operand: field name).
    Stsfld,

    /// Call a method (string operand: method name).
    Call,

    /// Unconditional branch (integer operand: target offset).
    Br,

    /// Conditional branch on false (integer operand: target offset).
    Brfalse,

    /// Discard the top of the evaluation stack.
    Pop,

    /// Return from the current method.
    Ret,
}

/// One decoded high-level instruction.
///
/// At most one of the two operand fields is meaningful for a given opcode;
/// which one is determined by the [`IlOpcode`] variant, not enforced
/// structurally. Records are created once by the decoder and immutable
/// thereafter.
///
/// # Examples
///
/// ```
/// use nesgen::{IlInstruction, IlOpcode};
///
/// let call = IlInstruction::with_name(IlOpcode::Call, "pal_col");
/// assert_eq!(call.str_operand.as_deref(), Some("pal_col"));
/// assert_eq!(call.int_operand, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IlInstruction {
    /// Semantic opcode from the high-level instruction set.
    pub opcode: IlOpcode,

    /// Integer operand, for instructions that carry a numeric literal or
    /// offset.
    pub int_operand: Option<i32>,

    /// Name operand, for instructions that reference a symbol (method name,
    /// field name).
    pub str_operand: Option<String>,
}

impl IlInstruction {
    /// A record with no operand.
    pub fn new(opcode: IlOpcode) -> Self {
        IlInstruction {
            opcode,
            int_operand: None,
            str_operand: None,
        }
    }

    /// A record carrying an integer operand.
    pub fn with_int(opcode: IlOpcode, value: i32) -> Self {
        IlInstruction {
            opcode,
            int_operand: Some(value),
            str_operand: None,
        }
    }

    /// A record carrying a name operand.
    pub fn with_name(opcode: IlOpcode, name: impl Into<String>) -> Self {
        IlInstruction {
            opcode,
            int_operand: None,
            str_operand: Some(name.into()),
        }
    }
}
