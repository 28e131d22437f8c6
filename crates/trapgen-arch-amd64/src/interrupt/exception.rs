/// Exception vector.
///
/// Covers the 32 vectors the architecture reserves for exceptions,
/// including the slots that are reserved and never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExceptionVector(pub u8);

#[expect(non_upper_case_globals)]
impl ExceptionVector {
    /// Divide Error (#DE).
    ///
    /// # Source
    ///
    /// DIV and IDIV instructions.
    pub const DivideError: Self = Self(0);

    /// Debug (#DB).
    ///
    /// # Source
    ///
    /// Any code or data reference.
    pub const DebugException: Self = Self(1);

    /// Non-maskable Interrupt.
    ///
    /// # Source
    ///
    /// Non-maskable external interrupt.
    pub const Nmi: Self = Self(2);

    /// Breakpoint (#BP).
    ///
    /// # Source
    ///
    /// INT3 instruction.
    pub const Breakpoint: Self = Self(3);

    /// Overflow (#OF).
    ///
    /// # Source
    ///
    /// INTO instruction.
    pub const Overflow: Self = Self(4);

    /// Bound Range Exceeded (#BR).
    ///
    /// # Source
    ///
    /// BOUND instruction.
    pub const BoundRange: Self = Self(5);

    /// Invalid Opcode (Undefined Opcode) (#UD).
    ///
    /// # Source
    ///
    /// UD instruction or reserved opcode.
    pub const InvalidOpcode: Self = Self(6);

    /// Device Not Available (No Math Coprocessor) (#NM).
    ///
    /// # Source
    ///
    /// Floating-point or WAIT/FWAIT instruction.
    pub const DeviceNotAvailable: Self = Self(7);

    /// Double fault (#DF).
    ///
    /// # Source
    ///
    /// Any instruction that can generate an exception, an NMI, or an INTR.
    pub const DoubleFault: Self = Self(8);

    /// CoProcessor Segment Overrun (reserved).
    ///
    /// # Source
    ///
    /// Floating-point instruction. Not generated by processors after the
    /// Intel386.
    pub const CoprocessorSegmentOverrun: Self = Self(9);

    /// Invalid TSS (#TS).
    ///
    /// # Source
    ///
    /// Task switch or TSS access.
    pub const InvalidTss: Self = Self(10);

    /// Segment Not Present (#NP).
    ///
    /// # Source
    ///
    /// Loading segment registers or accessing system segments.
    pub const SegmentNotPresent: Self = Self(11);

    /// Stack Segment Fault (#SS).
    ///
    /// # Source
    ///
    /// Stack operations and SS register loads.
    pub const StackSegmentFault: Self = Self(12);

    /// General Protection Fault (#GP).
    ///
    /// # Source
    ///
    /// Any memory reference and other protection checks.
    pub const GeneralProtectionFault: Self = Self(13);

    /// Page Fault (#PF).
    ///
    /// # Source
    ///
    /// Any memory reference.
    pub const PageFault: Self = Self(14);

    /// Reserved.
    pub const Reserved15: Self = Self(15);

    /// Floating-Point Error (Math Fault) (#MF).
    ///
    /// # Source
    ///
    /// Floating-point or WAIT/FWAIT instruction.
    pub const MathsFault: Self = Self(16);

    /// Alignment Check (#AC).
    ///
    /// # Source
    ///
    /// Any data reference in memory.
    pub const AlignmentCheck: Self = Self(17);

    /// Machine Check (#MC).
    ///
    /// # Source
    ///
    /// Error codes (if any) and source are model dependent.
    pub const MachineCheck: Self = Self(18);

    /// SIMD Floating-Point Exception (#XM).
    ///
    /// # Source
    ///
    /// SIMD Floating-Point Instruction.
    pub const SimdException: Self = Self(19);

    /// Virtualisation Exception (#VE).
    ///
    /// # Source
    ///
    /// EPT violations.
    pub const VirtualisationException: Self = Self(20);

    /// Control Protection Exception (#CP).
    ///
    /// # Source
    ///
    /// The RET, IRET, RSTORSSP, and SETSSBSY instructions can generate this
    /// exception. When CET indirect branch tracking is enabled, this exception
    /// can be generated due to a missing ENDBRANCH instruction at the target of
    /// an indirect call or jump.
    pub const ControlFlowProtection: Self = Self(21);

    /// Reserved.
    pub const Reserved22: Self = Self(22);

    /// Reserved.
    pub const Reserved23: Self = Self(23);

    /// Reserved.
    pub const Reserved24: Self = Self(24);

    /// Reserved.
    pub const Reserved25: Self = Self(25);

    /// Reserved.
    pub const Reserved26: Self = Self(26);

    /// Reserved.
    pub const Reserved27: Self = Self(27);

    /// Hypervisor Injection Exception (#HV).
    ///
    /// # Source
    ///
    /// Injected by a hypervisor into an SEV-SNP guest.
    pub const HypervisorInjection: Self = Self(28);

    /// VMM Communication Exception (#VC).
    ///
    /// # Source
    ///
    /// Intercepted instructions in an SEV-ES guest.
    pub const VmmCommunication: Self = Self(29);

    /// Security Exception (#SX).
    ///
    /// # Source
    ///
    /// Security-sensitive events such as INIT redirection under SVM.
    pub const SecurityException: Self = Self(30);

    /// Reserved.
    pub const Reserved31: Self = Self(31);

    /// Number of exception vectors.
    pub const COUNT: u8 = 32;

    /// Returns whether the exception vector requires an error code.
    ///
    /// These hardware exceptions must provide an error code:
    ///  - #DF (8) - always 0
    ///  - #TS (10)
    ///  - #NP (11)
    ///  - #SS (12)
    ///  - #GP (13)
    ///  - #PF (14)
    ///  - #AC (17) - always 0
    ///  - #CP (21)
    ///  - #VC (29)
    ///  - #SX (30)
    // (ref: Vol3A[6.3.1(External Interrupts)], AMD APM Vol2[8.2])
    pub fn requires_error_code(self) -> bool {
        matches!(
            self,
            Self::DoubleFault
                | Self::InvalidTss
                | Self::SegmentNotPresent
                | Self::StackSegmentFault
                | Self::GeneralProtectionFault
                | Self::PageFault
                | Self::AlignmentCheck
                | Self::ControlFlowProtection
                | Self::VmmCommunication
                | Self::SecurityException
        )
    }

    /// Returns whether the vector is reserved by the architecture.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::Reserved15
                | Self::Reserved22
                | Self::Reserved23
                | Self::Reserved24
                | Self::Reserved25
                | Self::Reserved26
                | Self::Reserved27
                | Self::Reserved31
        )
    }

    /// Returns the name of the entry trampoline for this vector.
    ///
    /// Reserved slots get a placeholder name carrying their number. Vectors
    /// outside the exception range have no name.
    pub fn label(self) -> Option<&'static str> {
        let label = match self {
            Self::DivideError => "division_error",
            Self::DebugException => "debug",
            Self::Nmi => "nmi",
            Self::Breakpoint => "breakpoint",
            Self::Overflow => "overflow",
            Self::BoundRange => "bound_range_exceeded",
            Self::InvalidOpcode => "invalid_opcode",
            Self::DeviceNotAvailable => "device_not_available",
            Self::DoubleFault => "double_fault",
            Self::CoprocessorSegmentOverrun => "coprocessor_segment_overrun",
            Self::InvalidTss => "invalid_tss",
            Self::SegmentNotPresent => "segment_not_present",
            Self::StackSegmentFault => "stack_segment_fault",
            Self::GeneralProtectionFault => "general_protection_fault",
            Self::PageFault => "page_fault",
            Self::Reserved15 => "reserved15",
            Self::MathsFault => "x87_fp_exception",
            Self::AlignmentCheck => "alignment_check",
            Self::MachineCheck => "machine_check",
            Self::SimdException => "simd_fp_exception",
            Self::VirtualisationException => "virtualization_exception",
            Self::ControlFlowProtection => "control_protection_exception",
            Self::Reserved22 => "reserved22",
            Self::Reserved23 => "reserved23",
            Self::Reserved24 => "reserved24",
            Self::Reserved25 => "reserved25",
            Self::Reserved26 => "reserved26",
            Self::Reserved27 => "reserved27",
            Self::HypervisorInjection => "hypervisor_injection",
            Self::VmmCommunication => "vmm_communication_exception",
            Self::SecurityException => "security_exception",
            Self::Reserved31 => "reserved31",
            _ => return None,
        };

        Some(label)
    }

    /// Returns the assembler mnemonic of the exception (e.g. `#PF`).
    ///
    /// Reserved slots and the NMI have no mnemonic.
    pub fn mnemonic(self) -> Option<&'static str> {
        let mnemonic = match self {
            Self::DivideError => "#DE",
            Self::DebugException => "#DB",
            Self::Breakpoint => "#BP",
            Self::Overflow => "#OF",
            Self::BoundRange => "#BR",
            Self::InvalidOpcode => "#UD",
            Self::DeviceNotAvailable => "#NM",
            Self::DoubleFault => "#DF",
            Self::InvalidTss => "#TS",
            Self::SegmentNotPresent => "#NP",
            Self::StackSegmentFault => "#SS",
            Self::GeneralProtectionFault => "#GP",
            Self::PageFault => "#PF",
            Self::MathsFault => "#MF",
            Self::AlignmentCheck => "#AC",
            Self::MachineCheck => "#MC",
            Self::SimdException => "#XM",
            Self::VirtualisationException => "#VE",
            Self::ControlFlowProtection => "#CP",
            Self::HypervisorInjection => "#HV",
            Self::VmmCommunication => "#VC",
            Self::SecurityException => "#SX",
            _ => return None,
        };

        Some(mnemonic)
    }
}
