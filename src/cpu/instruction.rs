use super::{Cpu, CpuResult};
use crate::interrupts::Interrupts;
use crate::memory::Memory;
use crate::ports::PortBank;
use lazy_static::lazy_static;

pub type ExecuteFn = fn(&mut Cpu, &mut Memory, &mut PortBank, &Interrupts) -> CpuResult<()>;

/// One row of the decode table: mnemonic for traces, instruction length in
/// bytes, baseline cycle count, and the handler. Conditional calls and
/// returns replace the baseline through the CPU's cycle override when the
/// condition fails.
#[derive(Clone)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub execute: ExecuteFn,
}

impl Instruction {
    pub const fn new(mnemonic: &'static str, length: u8, cycles: u8, execute: ExecuteFn) -> Self {
        Instruction {
            mnemonic,
            length,
            cycles,
            execute,
        }
    }

    // The unused 8080 encodings; executing one is fatal.
    pub const fn invalid() -> Self {
        Instruction {
            mnemonic: "INVALID",
            length: 1,
            cycles: 4,
            execute: Cpu::handle_invalid_opcode,
        }
    }
}

macro_rules! instr {
    ($mne:expr, $len:expr, $cyc:expr, $exec:expr) => {
        Instruction::new($mne, $len, $cyc, $exec)
    };
}
macro_rules! invalid {
    () => {
        Instruction::invalid()
    };
}

lazy_static! {
    // The full 8080 decode table (0x00 - 0xFF).
    pub static ref INSTRUCTIONS: [Instruction; 256] = [
        // --- 0x00 ---
        instr!("NOP", 1, 4, Cpu::op_nop),                 // 00
        instr!("LXI B, d16", 3, 10, Cpu::op_lxi_b),       // 01
        instr!("STAX B", 1, 7, Cpu::op_stax_b),           // 02
        instr!("INX B", 1, 5, Cpu::op_inx_b),             // 03
        instr!("INR B", 1, 5, Cpu::op_inr_b),             // 04
        instr!("DCR B", 1, 5, Cpu::op_dcr_b),             // 05
        instr!("MVI B, d8", 2, 7, Cpu::op_mvi_b),         // 06
        instr!("RLC", 1, 4, Cpu::op_rlc),                 // 07
        invalid!(),                                       // 08
        instr!("DAD B", 1, 10, Cpu::op_dad_b),            // 09
        instr!("LDAX B", 1, 7, Cpu::op_ldax_b),           // 0A
        instr!("DCX B", 1, 5, Cpu::op_dcx_b),             // 0B
        instr!("INR C", 1, 5, Cpu::op_inr_c),             // 0C
        instr!("DCR C", 1, 5, Cpu::op_dcr_c),             // 0D
        instr!("MVI C, d8", 2, 7, Cpu::op_mvi_c),         // 0E
        instr!("RRC", 1, 4, Cpu::op_rrc),                 // 0F
        // --- 0x10 ---
        invalid!(),                                       // 10
        instr!("LXI D, d16", 3, 10, Cpu::op_lxi_d),       // 11
        instr!("STAX D", 1, 7, Cpu::op_stax_d),           // 12
        instr!("INX D", 1, 5, Cpu::op_inx_d),             // 13
        instr!("INR D", 1, 5, Cpu::op_inr_d),             // 14
        instr!("DCR D", 1, 5, Cpu::op_dcr_d),             // 15
        instr!("MVI D, d8", 2, 7, Cpu::op_mvi_d),         // 16
        instr!("RAL", 1, 4, Cpu::op_ral),                 // 17
        invalid!(),                                       // 18
        instr!("DAD D", 1, 10, Cpu::op_dad_d),            // 19
        instr!("LDAX D", 1, 7, Cpu::op_ldax_d),           // 1A
        instr!("DCX D", 1, 5, Cpu::op_dcx_d),             // 1B
        instr!("INR E", 1, 5, Cpu::op_inr_e),             // 1C
        instr!("DCR E", 1, 5, Cpu::op_dcr_e),             // 1D
        instr!("MVI E, d8", 2, 7, Cpu::op_mvi_e),         // 1E
        instr!("RAR", 1, 4, Cpu::op_rar),                 // 1F
        // --- 0x20 ---
        instr!("RIM", 1, 4, Cpu::op_rim),                 // 20 (8085 only)
        instr!("LXI H, d16", 3, 10, Cpu::op_lxi_h),       // 21
        instr!("SHLD a16", 3, 16, Cpu::op_shld),          // 22
        instr!("INX H", 1, 5, Cpu::op_inx_h),             // 23
        instr!("INR H", 1, 5, Cpu::op_inr_h),             // 24
        instr!("DCR H", 1, 5, Cpu::op_dcr_h),             // 25
        instr!("MVI H, d8", 2, 7, Cpu::op_mvi_h),         // 26
        instr!("DAA", 1, 4, Cpu::op_daa),                 // 27
        invalid!(),                                       // 28
        instr!("DAD H", 1, 10, Cpu::op_dad_h),            // 29
        instr!("LHLD a16", 3, 16, Cpu::op_lhld),          // 2A
        instr!("DCX H", 1, 5, Cpu::op_dcx_h),             // 2B
        instr!("INR L", 1, 5, Cpu::op_inr_l),             // 2C
        instr!("DCR L", 1, 5, Cpu::op_dcr_l),             // 2D
        instr!("MVI L, d8", 2, 7, Cpu::op_mvi_l),         // 2E
        instr!("CMA", 1, 4, Cpu::op_cma),                 // 2F
        // --- 0x30 ---
        instr!("SIM", 1, 4, Cpu::op_sim),                 // 30 (8085 only)
        instr!("LXI SP, d16", 3, 10, Cpu::op_lxi_sp),     // 31
        instr!("STA a16", 3, 13, Cpu::op_sta),            // 32
        instr!("INX SP", 1, 5, Cpu::op_inx_sp),           // 33
        instr!("INR M", 1, 10, Cpu::op_inr_m),            // 34
        instr!("DCR M", 1, 10, Cpu::op_dcr_m),            // 35
        instr!("MVI M, d8", 2, 10, Cpu::op_mvi_m),        // 36
        instr!("STC", 1, 4, Cpu::op_stc),                 // 37
        invalid!(),                                       // 38
        instr!("DAD SP", 1, 10, Cpu::op_dad_sp),          // 39
        instr!("LDA a16", 3, 13, Cpu::op_lda),            // 3A
        instr!("DCX SP", 1, 5, Cpu::op_dcx_sp),           // 3B
        instr!("INR A", 1, 5, Cpu::op_inr_a),             // 3C
        instr!("DCR A", 1, 5, Cpu::op_dcr_a),             // 3D
        instr!("MVI A, d8", 2, 7, Cpu::op_mvi_a),         // 3E
        instr!("CMC", 1, 4, Cpu::op_cmc),                 // 3F

        // --- 0x40..0x7F: MOV r, r' ---
        instr!("MOV B, B", 1, 5, Cpu::op_mov_b_b),
        instr!("MOV B, C", 1, 5, Cpu::op_mov_b_c),
        instr!("MOV B, D", 1, 5, Cpu::op_mov_b_d),
        instr!("MOV B, E", 1, 5, Cpu::op_mov_b_e),
        instr!("MOV B, H", 1, 5, Cpu::op_mov_b_h),
        instr!("MOV B, L", 1, 5, Cpu::op_mov_b_l),
        instr!("MOV B, M", 1, 7, Cpu::op_mov_b_m),
        instr!("MOV B, A", 1, 5, Cpu::op_mov_b_a),
        instr!("MOV C, B", 1, 5, Cpu::op_mov_c_b),
        instr!("MOV C, C", 1, 5, Cpu::op_mov_c_c),
        instr!("MOV C, D", 1, 5, Cpu::op_mov_c_d),
        instr!("MOV C, E", 1, 5, Cpu::op_mov_c_e),
        instr!("MOV C, H", 1, 5, Cpu::op_mov_c_h),
        instr!("MOV C, L", 1, 5, Cpu::op_mov_c_l),
        instr!("MOV C, M", 1, 7, Cpu::op_mov_c_m),
        instr!("MOV C, A", 1, 5, Cpu::op_mov_c_a),
        instr!("MOV D, B", 1, 5, Cpu::op_mov_d_b),
        instr!("MOV D, C", 1, 5, Cpu::op_mov_d_c),
        instr!("MOV D, D", 1, 5, Cpu::op_mov_d_d),
        instr!("MOV D, E", 1, 5, Cpu::op_mov_d_e),
        instr!("MOV D, H", 1, 5, Cpu::op_mov_d_h),
        instr!("MOV D, L", 1, 5, Cpu::op_mov_d_l),
        instr!("MOV D, M", 1, 7, Cpu::op_mov_d_m),
        instr!("MOV D, A", 1, 5, Cpu::op_mov_d_a),
        instr!("MOV E, B", 1, 5, Cpu::op_mov_e_b),
        instr!("MOV E, C", 1, 5, Cpu::op_mov_e_c),
        instr!("MOV E, D", 1, 5, Cpu::op_mov_e_d),
        instr!("MOV E, E", 1, 5, Cpu::op_mov_e_e),
        instr!("MOV E, H", 1, 5, Cpu::op_mov_e_h),
        instr!("MOV E, L", 1, 5, Cpu::op_mov_e_l),
        instr!("MOV E, M", 1, 7, Cpu::op_mov_e_m),
        instr!("MOV E, A", 1, 5, Cpu::op_mov_e_a),
        instr!("MOV H, B", 1, 5, Cpu::op_mov_h_b),
        instr!("MOV H, C", 1, 5, Cpu::op_mov_h_c),
        instr!("MOV H, D", 1, 5, Cpu::op_mov_h_d),
        instr!("MOV H, E", 1, 5, Cpu::op_mov_h_e),
        instr!("MOV H, H", 1, 5, Cpu::op_mov_h_h),
        instr!("MOV H, L", 1, 5, Cpu::op_mov_h_l),
        instr!("MOV H, M", 1, 7, Cpu::op_mov_h_m),
        instr!("MOV H, A", 1, 5, Cpu::op_mov_h_a),
        instr!("MOV L, B", 1, 5, Cpu::op_mov_l_b),
        instr!("MOV L, C", 1, 5, Cpu::op_mov_l_c),
        instr!("MOV L, D", 1, 5, Cpu::op_mov_l_d),
        instr!("MOV L, E", 1, 5, Cpu::op_mov_l_e),
        instr!("MOV L, H", 1, 5, Cpu::op_mov_l_h),
        instr!("MOV L, L", 1, 5, Cpu::op_mov_l_l),
        instr!("MOV L, M", 1, 7, Cpu::op_mov_l_m),
        instr!("MOV L, A", 1, 5, Cpu::op_mov_l_a),
        instr!("MOV M, B", 1, 7, Cpu::op_mov_m_b),
        instr!("MOV M, C", 1, 7, Cpu::op_mov_m_c),
        instr!("MOV M, D", 1, 7, Cpu::op_mov_m_d),
        instr!("MOV M, E", 1, 7, Cpu::op_mov_m_e),
        instr!("MOV M, H", 1, 7, Cpu::op_mov_m_h),
        instr!("MOV M, L", 1, 7, Cpu::op_mov_m_l),
        instr!("HLT", 1, 7, Cpu::op_hlt),                 // 76
        instr!("MOV M, A", 1, 7, Cpu::op_mov_m_a),
        instr!("MOV A, B", 1, 5, Cpu::op_mov_a_b),
        instr!("MOV A, C", 1, 5, Cpu::op_mov_a_c),
        instr!("MOV A, D", 1, 5, Cpu::op_mov_a_d),
        instr!("MOV A, E", 1, 5, Cpu::op_mov_a_e),
        instr!("MOV A, H", 1, 5, Cpu::op_mov_a_h),
        instr!("MOV A, L", 1, 5, Cpu::op_mov_a_l),
        instr!("MOV A, M", 1, 7, Cpu::op_mov_a_m),
        instr!("MOV A, A", 1, 5, Cpu::op_mov_a_a),

        // --- 0x80..0xBF: ALU A, r ---
        instr!("ADD B", 1, 4, Cpu::op_add_b),
        instr!("ADD C", 1, 4, Cpu::op_add_c),
        instr!("ADD D", 1, 4, Cpu::op_add_d),
        instr!("ADD E", 1, 4, Cpu::op_add_e),
        instr!("ADD H", 1, 4, Cpu::op_add_h),
        instr!("ADD L", 1, 4, Cpu::op_add_l),
        instr!("ADD M", 1, 7, Cpu::op_add_m),
        instr!("ADD A", 1, 4, Cpu::op_add_a),
        instr!("ADC B", 1, 4, Cpu::op_adc_b),
        instr!("ADC C", 1, 4, Cpu::op_adc_c),
        instr!("ADC D", 1, 4, Cpu::op_adc_d),
        instr!("ADC E", 1, 4, Cpu::op_adc_e),
        instr!("ADC H", 1, 4, Cpu::op_adc_h),
        instr!("ADC L", 1, 4, Cpu::op_adc_l),
        instr!("ADC M", 1, 7, Cpu::op_adc_m),
        instr!("ADC A", 1, 4, Cpu::op_adc_a),
        instr!("SUB B", 1, 4, Cpu::op_sub_b),
        instr!("SUB C", 1, 4, Cpu::op_sub_c),
        instr!("SUB D", 1, 4, Cpu::op_sub_d),
        instr!("SUB E", 1, 4, Cpu::op_sub_e),
        instr!("SUB H", 1, 4, Cpu::op_sub_h),
        instr!("SUB L", 1, 4, Cpu::op_sub_l),
        instr!("SUB M", 1, 7, Cpu::op_sub_m),
        instr!("SUB A", 1, 4, Cpu::op_sub_a),
        instr!("SBB B", 1, 4, Cpu::op_sbb_b),
        instr!("SBB C", 1, 4, Cpu::op_sbb_c),
        instr!("SBB D", 1, 4, Cpu::op_sbb_d),
        instr!("SBB E", 1, 4, Cpu::op_sbb_e),
        instr!("SBB H", 1, 4, Cpu::op_sbb_h),
        instr!("SBB L", 1, 4, Cpu::op_sbb_l),
        instr!("SBB M", 1, 7, Cpu::op_sbb_m),
        instr!("SBB A", 1, 4, Cpu::op_sbb_a),
        instr!("ANA B", 1, 4, Cpu::op_ana_b),
        instr!("ANA C", 1, 4, Cpu::op_ana_c),
        instr!("ANA D", 1, 4, Cpu::op_ana_d),
        instr!("ANA E", 1, 4, Cpu::op_ana_e),
        instr!("ANA H", 1, 4, Cpu::op_ana_h),
        instr!("ANA L", 1, 4, Cpu::op_ana_l),
        instr!("ANA M", 1, 7, Cpu::op_ana_m),
        instr!("ANA A", 1, 4, Cpu::op_ana_a),
        instr!("XRA B", 1, 4, Cpu::op_xra_b),
        instr!("XRA C", 1, 4, Cpu::op_xra_c),
        instr!("XRA D", 1, 4, Cpu::op_xra_d),
        instr!("XRA E", 1, 4, Cpu::op_xra_e),
        instr!("XRA H", 1, 4, Cpu::op_xra_h),
        instr!("XRA L", 1, 4, Cpu::op_xra_l),
        instr!("XRA M", 1, 7, Cpu::op_xra_m),
        instr!("XRA A", 1, 4, Cpu::op_xra_a),
        instr!("ORA B", 1, 4, Cpu::op_ora_b),
        instr!("ORA C", 1, 4, Cpu::op_ora_c),
        instr!("ORA D", 1, 4, Cpu::op_ora_d),
        instr!("ORA E", 1, 4, Cpu::op_ora_e),
        instr!("ORA H", 1, 4, Cpu::op_ora_h),
        instr!("ORA L", 1, 4, Cpu::op_ora_l),
        instr!("ORA M", 1, 7, Cpu::op_ora_m),
        instr!("ORA A", 1, 4, Cpu::op_ora_a),
        instr!("CMP B", 1, 4, Cpu::op_cmp_b),
        instr!("CMP C", 1, 4, Cpu::op_cmp_c),
        instr!("CMP D", 1, 4, Cpu::op_cmp_d),
        instr!("CMP E", 1, 4, Cpu::op_cmp_e),
        instr!("CMP H", 1, 4, Cpu::op_cmp_h),
        instr!("CMP L", 1, 4, Cpu::op_cmp_l),
        instr!("CMP M", 1, 7, Cpu::op_cmp_m),
        instr!("CMP A", 1, 4, Cpu::op_cmp_a),

        // --- 0xC0 ---
        instr!("RNZ", 1, 11, Cpu::op_rnz),                // C0 (5 untaken)
        instr!("POP B", 1, 10, Cpu::op_pop_b),            // C1
        instr!("JNZ a16", 3, 10, Cpu::op_jnz),            // C2
        instr!("JMP a16", 3, 10, Cpu::op_jmp),            // C3
        instr!("CNZ a16", 3, 17, Cpu::op_cnz),            // C4 (11 untaken)
        instr!("PUSH B", 1, 11, Cpu::op_push_b),          // C5
        instr!("ADI d8", 2, 7, Cpu::op_adi),              // C6
        instr!("RST 0", 1, 11, Cpu::op_rst_0),            // C7
        instr!("RZ", 1, 11, Cpu::op_rz),                  // C8 (5 untaken)
        instr!("RET", 1, 10, Cpu::op_ret),                // C9
        instr!("JZ a16", 3, 10, Cpu::op_jz),              // CA
        invalid!(),                                       // CB
        instr!("CZ a16", 3, 17, Cpu::op_cz),              // CC (11 untaken)
        instr!("CALL a16", 3, 17, Cpu::op_call),          // CD
        instr!("ACI d8", 2, 7, Cpu::op_aci),              // CE
        instr!("RST 1", 1, 11, Cpu::op_rst_1),            // CF
        // --- 0xD0 ---
        instr!("RNC", 1, 11, Cpu::op_rnc),                // D0 (5 untaken)
        instr!("POP D", 1, 10, Cpu::op_pop_d),            // D1
        instr!("JNC a16", 3, 10, Cpu::op_jnc),            // D2
        instr!("OUT d8", 2, 10, Cpu::op_out),             // D3
        instr!("CNC a16", 3, 17, Cpu::op_cnc),            // D4 (11 untaken)
        instr!("PUSH D", 1, 11, Cpu::op_push_d),          // D5
        instr!("SUI d8", 2, 7, Cpu::op_sui),              // D6
        instr!("RST 2", 1, 11, Cpu::op_rst_2),            // D7
        instr!("RC", 1, 11, Cpu::op_rc),                  // D8 (5 untaken)
        invalid!(),                                       // D9
        instr!("JC a16", 3, 10, Cpu::op_jc),              // DA
        instr!("IN d8", 2, 10, Cpu::op_in),               // DB
        instr!("CC a16", 3, 17, Cpu::op_cc),              // DC (11 untaken)
        invalid!(),                                       // DD
        instr!("SBI d8", 2, 7, Cpu::op_sbi),              // DE
        instr!("RST 3", 1, 11, Cpu::op_rst_3),            // DF
        // --- 0xE0 ---
        instr!("RPO", 1, 11, Cpu::op_rpo),                // E0 (5 untaken)
        instr!("POP H", 1, 10, Cpu::op_pop_h),            // E1
        instr!("JPO a16", 3, 10, Cpu::op_jpo),            // E2
        instr!("XTHL", 1, 18, Cpu::op_xthl),              // E3
        instr!("CPO a16", 3, 17, Cpu::op_cpo),            // E4 (11 untaken)
        instr!("PUSH H", 1, 11, Cpu::op_push_h),          // E5
        instr!("ANI d8", 2, 7, Cpu::op_ani),              // E6
        instr!("RST 4", 1, 11, Cpu::op_rst_4),            // E7
        instr!("RPE", 1, 11, Cpu::op_rpe),                // E8 (5 untaken)
        instr!("PCHL", 1, 5, Cpu::op_pchl),               // E9
        instr!("JPE a16", 3, 10, Cpu::op_jpe),            // EA
        instr!("XCHG", 1, 4, Cpu::op_xchg),               // EB
        instr!("CPE a16", 3, 17, Cpu::op_cpe),            // EC (11 untaken)
        invalid!(),                                       // ED
        instr!("XRI d8", 2, 7, Cpu::op_xri),              // EE
        instr!("RST 5", 1, 11, Cpu::op_rst_5),            // EF
        // --- 0xF0 ---
        instr!("RP", 1, 11, Cpu::op_rp),                  // F0 (5 untaken)
        instr!("POP PSW", 1, 10, Cpu::op_pop_psw),        // F1
        instr!("JP a16", 3, 10, Cpu::op_jp),              // F2
        instr!("DI", 1, 4, Cpu::op_di),                   // F3
        instr!("CP a16", 3, 17, Cpu::op_cp),              // F4 (11 untaken)
        instr!("PUSH PSW", 1, 11, Cpu::op_push_psw),      // F5
        instr!("ORI d8", 2, 7, Cpu::op_ori),              // F6
        instr!("RST 6", 1, 11, Cpu::op_rst_6),            // F7
        instr!("RM", 1, 11, Cpu::op_rm),                  // F8 (5 untaken)
        instr!("SPHL", 1, 5, Cpu::op_sphl),               // F9
        instr!("JM a16", 3, 10, Cpu::op_jm),              // FA
        instr!("EI", 1, 4, Cpu::op_ei),                   // FB
        instr!("CM a16", 3, 17, Cpu::op_cm),              // FC (11 untaken)
        invalid!(),                                       // FD
        instr!("CPI d8", 2, 7, Cpu::op_cpi),              // FE
        instr!("RST 7", 1, 11, Cpu::op_rst_7),            // FF
    ];
}
