mod exception;
pub use self::exception::ExceptionVector;

/// The architecturally defined exception vectors, in vector order.
///
/// The position of each entry is its vector number. Reserved slots are
/// present so that the table covers `0..32` without gaps.
pub const EXCEPTIONS: [ExceptionVector; ExceptionVector::COUNT as usize] = [
    ExceptionVector::DivideError,
    ExceptionVector::DebugException,
    ExceptionVector::Nmi,
    ExceptionVector::Breakpoint,
    ExceptionVector::Overflow,
    ExceptionVector::BoundRange,
    ExceptionVector::InvalidOpcode,
    ExceptionVector::DeviceNotAvailable,
    ExceptionVector::DoubleFault,
    ExceptionVector::CoprocessorSegmentOverrun,
    ExceptionVector::InvalidTss,
    ExceptionVector::SegmentNotPresent,
    ExceptionVector::StackSegmentFault,
    ExceptionVector::GeneralProtectionFault,
    ExceptionVector::PageFault,
    ExceptionVector::Reserved15,
    ExceptionVector::MathsFault,
    ExceptionVector::AlignmentCheck,
    ExceptionVector::MachineCheck,
    ExceptionVector::SimdException,
    ExceptionVector::VirtualisationException,
    ExceptionVector::ControlFlowProtection,
    ExceptionVector::Reserved22,
    ExceptionVector::Reserved23,
    ExceptionVector::Reserved24,
    ExceptionVector::Reserved25,
    ExceptionVector::Reserved26,
    ExceptionVector::Reserved27,
    ExceptionVector::HypervisorInjection,
    ExceptionVector::VmmCommunication,
    ExceptionVector::SecurityException,
    ExceptionVector::Reserved31,
];
