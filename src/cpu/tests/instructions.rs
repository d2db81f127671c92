//! Instruction-level tests: transfers, arithmetic and its flag vectors,
//! rotates, stack discipline, control flow, and the decode table itself.

use super::*;
use crate::cpu::instruction::INSTRUCTIONS;

#[test]
fn new_cpu_is_fully_zeroed() {
    let cpu = Cpu::new();
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.sp, 0);
    assert_eq!(cpu.a, 0);
    assert_eq!(cpu.flags, Flags::default());
    assert!(!cpu.halted);
    assert!(!cpu.has_interrupt);
    assert_eq!(cpu.interrupt_instruction, [0, 0, 0]);
}

// ========== Transfers ==========

#[test]
fn mov_copies_between_registers() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.b = 0x42;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x78], 0x0100); // MOV A, B
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.b, 0x42);
}

#[test]
fn mov_through_m_uses_the_hl_address() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.h = 0x20;
    cpu.l = 0x50;
    cpu.a = 0x99;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x77], 0x0100); // MOV M, A
    assert_eq!(mem.read_byte(0x2050), 0x99);

    cpu.a = 0x00;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x7E], 0x0103); // MOV A, M
    assert_eq!(cpu.a, 0x99);
}

#[test]
fn mvi_and_lxi_load_immediates() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x06, 0xAB], 0x0100); // MVI B
    assert_eq!(cpu.b, 0xAB);
    run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0x21, 0x34, 0x12],
        0x0102,
    ); // LXI H
    assert_eq!(cpu.h, 0x12);
    assert_eq!(cpu.l, 0x34);
    run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0x31, 0x00, 0x24],
        0x0105,
    ); // LXI SP
    assert_eq!(cpu.sp, 0x2400);
}

#[test]
fn sta_and_lda_use_the_direct_address() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x5A;
    run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0x32, 0x00, 0x22],
        0x0100,
    ); // STA 0x2200
    assert_eq!(mem.read_byte(0x2200), 0x5A);
    cpu.a = 0x00;
    run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0x3A, 0x00, 0x22],
        0x0103,
    ); // LDA 0x2200
    assert_eq!(cpu.a, 0x5A);
}

#[test]
fn shld_then_lhld_round_trips_hl() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.h = 0xAE;
    cpu.l = 0x29;
    run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0x22, 0x0A, 0x20],
        0x0100,
    ); // SHLD 0x200A
    assert_eq!(mem.read_byte(0x200A), 0x29);
    assert_eq!(mem.read_byte(0x200B), 0xAE);

    cpu.h = 0;
    cpu.l = 0;
    run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0x2A, 0x0A, 0x20],
        0x0103,
    ); // LHLD 0x200A
    assert_eq!(cpu.h, 0xAE);
    assert_eq!(cpu.l, 0x29);
}

#[test]
fn xchg_is_an_involution() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.h = 0x11;
    cpu.l = 0x22;
    cpu.d = 0x33;
    cpu.e = 0x44;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xEB], 0x0100);
    assert_eq!((cpu.h, cpu.l, cpu.d, cpu.e), (0x33, 0x44, 0x11, 0x22));
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xEB], 0x0101);
    assert_eq!((cpu.h, cpu.l, cpu.d, cpu.e), (0x11, 0x22, 0x33, 0x44));
}

#[test]
fn xthl_is_an_involution() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x23F0;
    cpu.h = 0x0B;
    cpu.l = 0x3C;
    mem.write_byte(0x23F0, 0xF0);
    mem.write_byte(0x23F1, 0x0D);
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xE3], 0x0100);
    assert_eq!((cpu.h, cpu.l), (0x0D, 0xF0));
    assert_eq!(mem.read_byte(0x23F0), 0x3C);
    assert_eq!(mem.read_byte(0x23F1), 0x0B);
    assert_eq!(cpu.sp, 0x23F0);
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xE3], 0x0101);
    assert_eq!((cpu.h, cpu.l), (0x0B, 0x3C));
    assert_eq!(mem.read_byte(0x23F0), 0xF0);
    assert_eq!(mem.read_byte(0x23F1), 0x0D);
}

// ========== Arithmetic & Flags ==========

#[test]
fn adi_overflow_sets_the_documented_flag_vector() {
    // A=0x3A + 0xC6 = 0x100: result byte 0, carry out of both nibble and byte.
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x3A;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xC6, 0xC6], 0x0100);
    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flags.z);
    assert!(!cpu.flags.s);
    assert!(cpu.flags.p);
    assert!(cpu.flags.cy);
    assert!(cpu.flags.ac);
}

#[test]
fn adc_folds_the_carry_into_result_and_aux_carry() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x0F;
    cpu.flags.cy = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xCE, 0x00], 0x0100); // ACI 0
    assert_eq!(cpu.a, 0x10);
    assert!(cpu.flags.ac);
    assert!(!cpu.flags.cy);
}

#[test]
fn sub_borrow_wraps_and_sets_carry() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x00;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xD6, 0x01], 0x0100); // SUI 1
    assert_eq!(cpu.a, 0xFF);
    assert!(cpu.flags.cy);
    assert!(cpu.flags.s);
    assert!(cpu.flags.p); // 0xFF has eight 1-bits
    assert!(!cpu.flags.z);
}

#[test]
fn sbb_includes_the_borrow_in_both_result_and_aux_carry() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x04;
    cpu.b = 0x02;
    cpu.flags.cy = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x98], 0x0100); // SBB B
    assert_eq!(cpu.a, 0x01);
    assert!(!cpu.flags.cy);
    assert!(cpu.flags.ac);
}

#[test]
fn cmp_sets_flags_but_discards_the_result() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x0A;
    cpu.e = 0x0A;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xBB], 0x0100); // CMP E
    assert_eq!(cpu.a, 0x0A);
    assert!(cpu.flags.z);
    assert!(!cpu.flags.cy);

    cpu.e = 0x0B;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xBB], 0x0101);
    assert!(!cpu.flags.z);
    assert!(cpu.flags.cy);
}

#[test]
fn logic_group_clears_carry_and_aux_carry() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0xF0;
    cpu.flags.cy = true;
    cpu.flags.ac = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xE6, 0x0F], 0x0100); // ANI 0x0F
    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flags.z);
    assert!(!cpu.flags.cy);
    assert!(!cpu.flags.ac);

    cpu.a = 0x0F;
    cpu.flags.cy = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xF6, 0xF0], 0x0102); // ORI 0xF0
    assert_eq!(cpu.a, 0xFF);
    assert!(!cpu.flags.cy);

    cpu.flags.cy = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xEE, 0xFF], 0x0104); // XRI 0xFF
    assert_eq!(cpu.a, 0x00);
    assert!(!cpu.flags.cy);
}

#[test]
fn parity_counts_all_bits_of_the_result() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x00;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xC6, 0x03], 0x0100); // ADI 3
    assert!(cpu.flags.p); // 0x03: two bits
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xC6, 0x04], 0x0102); // ADI 4
    assert!(!cpu.flags.p); // 0x07: three bits
}

#[test]
fn inr_and_dcr_leave_carry_untouched() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.b = 0xFF;
    cpu.flags.cy = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x04], 0x0100); // INR B
    assert_eq!(cpu.b, 0x00);
    assert!(cpu.flags.z);
    assert!(cpu.flags.ac);
    assert!(cpu.flags.cy); // unchanged

    cpu.c = 0x00;
    cpu.flags.cy = false;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x0D], 0x0101); // DCR C
    assert_eq!(cpu.c, 0xFF);
    assert!(cpu.flags.s);
    assert!(!cpu.flags.cy); // unchanged
}

#[test]
fn inr_m_increments_through_memory() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.h = 0x20;
    cpu.l = 0x10;
    mem.write_byte(0x2010, 0x7F);
    let cycles = run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x34], 0x0100);
    assert_eq!(mem.read_byte(0x2010), 0x80);
    assert!(cpu.flags.s);
    assert_eq!(cycles, 10);
}

#[test]
fn dad_h_doubles_hl_and_reports_the_carry() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.h = 0xFF;
    cpu.l = 0xFF;
    cpu.flags.z = true;
    cpu.flags.s = true;
    cpu.flags.p = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x29], 0x0100); // DAD H
    assert_eq!(cpu.h, 0xFF);
    assert_eq!(cpu.l, 0xFE);
    assert!(cpu.flags.cy);
    // Z/S/P untouched by DAD
    assert!(cpu.flags.z);
    assert!(cpu.flags.s);
    assert!(cpu.flags.p);
}

#[test]
fn inx_dcx_wrap_without_flags() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.b = 0xFF;
    cpu.c = 0xFF;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x03], 0x0100); // INX B
    assert_eq!((cpu.b, cpu.c), (0x00, 0x00));
    assert_eq!(cpu.flags, Flags::default());
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x0B], 0x0101); // DCX B
    assert_eq!((cpu.b, cpu.c), (0xFF, 0xFF));
}

#[test]
fn daa_adjusts_both_nibbles() {
    // 0x9B: both digits overflow 9, so both corrections fire.
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x9B;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x27], 0x0100);
    assert_eq!(cpu.a, 0x01);
    assert!(cpu.flags.cy);
    assert!(cpu.flags.ac);
    assert!(!cpu.flags.z);
    assert!(!cpu.flags.s);
    assert!(!cpu.flags.p);
}

#[test]
fn daa_after_bcd_addition() {
    // 0x29 + 0x14 = 0x3D; DAA folds it back to the decimal sum 43.
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x29;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xC6, 0x14], 0x0100);
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x27], 0x0102);
    assert_eq!(cpu.a, 0x43);
    assert!(!cpu.flags.cy);
}

#[test]
fn cma_complements_without_flags() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x51;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x2F], 0x0100);
    assert_eq!(cpu.a, 0xAE);
    assert_eq!(cpu.flags, Flags::default());
}

#[test]
fn stc_and_cmc_drive_the_carry() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x37], 0x0100); // STC
    assert!(cpu.flags.cy);
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x3F], 0x0101); // CMC
    assert!(!cpu.flags.cy);
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x3F], 0x0102); // CMC
    assert!(cpu.flags.cy);
}

// ========== Rotates ==========

#[test]
fn rlc_wraps_the_high_bit_into_carry_and_bit_0() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x80;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x07], 0x0100);
    assert_eq!(cpu.a, 0x01);
    assert!(cpu.flags.cy);
}

#[test]
fn rlc_eight_times_is_the_identity() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0xB5;
    load_program(&mut mem, &[0x07; 8], 0x0100);
    cpu.pc = 0x0100;
    run_many(&mut cpu, &mut mem, &mut ports, &interrupts, 8);
    assert_eq!(cpu.a, 0xB5);
}

#[test]
fn rrc_eight_times_is_the_identity() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x4D;
    load_program(&mut mem, &[0x0F; 8], 0x0100);
    cpu.pc = 0x0100;
    run_many(&mut cpu, &mut mem, &mut ports, &interrupts, 8);
    assert_eq!(cpu.a, 0x4D);
}

#[test]
fn ral_nine_times_is_the_identity_on_the_nine_bit_word() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x6A;
    cpu.flags.cy = true;
    load_program(&mut mem, &[0x17; 9], 0x0100);
    cpu.pc = 0x0100;
    run_many(&mut cpu, &mut mem, &mut ports, &interrupts, 9);
    assert_eq!(cpu.a, 0x6A);
    assert!(cpu.flags.cy);
}

#[test]
fn rar_nine_times_is_the_identity_on_the_nine_bit_word() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x93;
    cpu.flags.cy = false;
    load_program(&mut mem, &[0x1F; 9], 0x0100);
    cpu.pc = 0x0100;
    run_many(&mut cpu, &mut mem, &mut ports, &interrupts, 9);
    assert_eq!(cpu.a, 0x93);
    assert!(!cpu.flags.cy);
}

#[test]
fn rar_shifts_the_carry_into_bit_7() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.a = 0x01;
    cpu.flags.cy = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x1F], 0x0100);
    assert_eq!(cpu.a, 0x80);
    assert!(cpu.flags.cy);
}

// ========== Stack ==========

#[test]
fn call_pushes_the_return_address_high_then_low() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x2400;
    let cycles = run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0xCD, 0x34, 0x12],
        0x0100,
    );
    assert_eq!(cpu.pc, 0x1234);
    assert_eq!(cpu.sp, 0x23FE);
    assert_eq!(mem.read_byte(0x23FE), 0x03); // return address low
    assert_eq!(mem.read_byte(0x23FF), 0x01); // return address high
    assert_eq!(cycles, 17);
}

#[test]
fn ret_pops_low_then_high() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x23FE;
    mem.write_byte(0x23FE, 0x03);
    mem.write_byte(0x23FF, 0x01);
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xC9], 0x1234);
    assert_eq!(cpu.pc, 0x0103);
    assert_eq!(cpu.sp, 0x2400);
}

#[test]
fn push_pop_is_the_identity_on_pair_and_sp() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x2400;
    cpu.d = 0x8F;
    cpu.e = 0x9D;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xD5], 0x0100); // PUSH D
    assert_eq!(cpu.sp, 0x23FE);
    cpu.d = 0;
    cpu.e = 0;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xD1], 0x0101); // POP D
    assert_eq!((cpu.d, cpu.e), (0x8F, 0x9D));
    assert_eq!(cpu.sp, 0x2400);
}

#[test]
fn push_pop_psw_restores_accumulator_and_all_five_flags() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x2400;
    cpu.a = 0xC7;
    cpu.flags = Flags {
        z: true,
        s: false,
        p: true,
        cy: true,
        ac: false,
    };
    let saved = cpu.flags;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xF5], 0x0100); // PUSH PSW
    cpu.a = 0;
    cpu.flags = Flags::default();
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xF1], 0x0101); // POP PSW
    assert_eq!(cpu.a, 0xC7);
    assert_eq!(cpu.flags, saved);
    assert_eq!(cpu.sp, 0x2400);
}

#[test]
fn psw_byte_has_the_fixed_bit_layout() {
    let flags = Flags {
        z: true,
        s: true,
        p: true,
        cy: true,
        ac: true,
    };
    assert_eq!(flags.to_psw(), 0xD7);
    assert_eq!(Flags::default().to_psw(), 0x02);
    assert_eq!(Flags::from_psw(0xD7), flags);
}

#[test]
fn sphl_copies_hl_into_the_stack_pointer() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.h = 0x23;
    cpu.l = 0xF0;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xF9], 0x0100);
    assert_eq!(cpu.sp, 0x23F0);
}

// ========== Control Flow ==========

#[test]
fn jmp_transfers_unconditionally() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    let cycles = run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0xC3, 0x00, 0x18],
        0x0100,
    );
    assert_eq!(cpu.pc, 0x1800);
    assert_eq!(cycles, 10);
}

#[test]
fn untaken_conditional_jump_falls_through() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.flags.z = true;
    let cycles = run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0xC2, 0x00, 0x18],
        0x0100,
    ); // JNZ
    assert_eq!(cpu.pc, 0x0103);
    assert_eq!(cycles, 10); // jumps cost the same either way
}

#[test]
fn condition_codes_read_the_right_flags() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.flags.s = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xFA, 0x00, 0x20], 0x0100); // JM
    assert_eq!(cpu.pc, 0x2000);
    cpu.flags.p = true;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xEA, 0x00, 0x21], 0x2000); // JPE
    assert_eq!(cpu.pc, 0x2100);
    cpu.flags.cy = false;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xD2, 0x00, 0x22], 0x2100); // JNC
    assert_eq!(cpu.pc, 0x2200);
}

#[test]
fn untaken_conditional_call_overrides_to_11_cycles() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x2400;
    cpu.flags.z = true;
    let cycles = run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0xC4, 0x34, 0x12],
        0x0100,
    ); // CNZ
    assert_eq!(cycles, 11);
    assert_eq!(cpu.pc, 0x0103); // fell through
    assert_eq!(cpu.sp, 0x2400); // nothing pushed
}

#[test]
fn taken_conditional_call_costs_the_full_17() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x2400;
    cpu.flags.z = false;
    let cycles = run_one(
        &mut cpu,
        &mut mem,
        &mut ports,
        &interrupts,
        &[0xC4, 0x34, 0x12],
        0x0100,
    ); // CNZ
    assert_eq!(cycles, 17);
    assert_eq!(cpu.pc, 0x1234);
    assert_eq!(cpu.sp, 0x23FE);
}

#[test]
fn untaken_conditional_return_overrides_to_5_cycles() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x23FE;
    cpu.flags.z = false;
    let cycles = run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xC8], 0x0100); // RZ
    assert_eq!(cycles, 5);
    assert_eq!(cpu.pc, 0x0101);
    assert_eq!(cpu.sp, 0x23FE);
}

#[test]
fn taken_conditional_return_costs_11() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x23FE;
    mem.write_byte(0x23FE, 0x00);
    mem.write_byte(0x23FF, 0x20);
    cpu.flags.z = true;
    let cycles = run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xC8], 0x0100); // RZ
    assert_eq!(cycles, 11);
    assert_eq!(cpu.pc, 0x2000);
}

#[test]
fn rst_calls_the_vector() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.sp = 0x2400;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xD7], 0x0100); // RST 2
    assert_eq!(cpu.pc, 0x0010);
    assert_eq!(mem.read_byte(0x23FE), 0x01);
    assert_eq!(mem.read_byte(0x23FF), 0x01);
}

#[test]
fn pchl_jumps_through_hl() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    cpu.h = 0x1A;
    cpu.l = 0xBC;
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0xE9], 0x0100);
    assert_eq!(cpu.pc, 0x1ABC);
}

#[test]
fn pc_wraps_modulo_64k() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    // NOP mirrored at the top of the address space; PC must wrap to 0.
    run_one(&mut cpu, &mut mem, &mut ports, &interrupts, &[0x00], 0xFFFF);
    assert_eq!(cpu.pc, 0x0000);
}

// ========== I/O ==========

#[test]
fn in_and_out_drive_the_shift_register_end_to_end() {
    let (mut cpu, mut mem, mut ports, interrupts) = machine();
    let program = [
        0x3E, 0xAB, // MVI A, 0xAB
        0xD3, 0x04, // OUT 4
        0x3E, 0xCD, // MVI A, 0xCD
        0xD3, 0x04, // OUT 4
        0x3E, 0x03, // MVI A, 0x03
        0xD3, 0x02, // OUT 2
        0xDB, 0x03, // IN 3
    ];
    load_program(&mut mem, &program, 0x0100);
    cpu.pc = 0x0100;
    run_many(&mut cpu, &mut mem, &mut ports, &interrupts, 7);
    assert_eq!(cpu.a, 0xE5);
}

// ========== Decode Table ==========

#[test]
fn every_table_entry_has_sane_length_and_cycles() {
    const VALID_CYCLES: [u8; 9] = [4, 5, 7, 10, 11, 13, 16, 17, 18];
    for (opcode, instruction) in INSTRUCTIONS.iter().enumerate() {
        assert!(
            (1..=3).contains(&instruction.length),
            "opcode {:#04x} has length {}",
            opcode,
            instruction.length
        );
        assert!(
            VALID_CYCLES.contains(&instruction.cycles),
            "opcode {:#04x} has cycle count {}",
            opcode,
            instruction.cycles
        );
    }
}

#[test]
fn unused_opcodes_fail_as_unimplemented() {
    for opcode in [0x08u8, 0x10, 0x18, 0x28, 0x38, 0xCB, 0xD9, 0xDD, 0xED, 0xFD] {
        let (mut cpu, mut mem, mut ports, interrupts) = machine();
        load_program(&mut mem, &[opcode], 0x0100);
        cpu.pc = 0x0100;
        let result = cpu.step(&mut mem, &mut ports, &interrupts);
        assert!(result.is_err(), "opcode {:#04x} should fail", opcode);
    }
}

#[test]
fn rim_and_sim_fail_as_8085_only() {
    for opcode in [0x20u8, 0x30] {
        let (mut cpu, mut mem, mut ports, interrupts) = machine();
        load_program(&mut mem, &[opcode], 0x0100);
        cpu.pc = 0x0100;
        let error = cpu.step(&mut mem, &mut ports, &interrupts).unwrap_err();
        assert!(error.contains("8085"), "unexpected error: {}", error);
    }
}
