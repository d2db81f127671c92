use super::{Cpu, CpuResult, Flags};
use crate::interrupts::Interrupts;
use crate::memory::Memory;
use crate::ports::PortBank;

// --- Transfer Group Implementations ---
// MOV/MVI/LXI, the direct and indirect accumulator loads/stores, the HL
// exchanges, and the stack transfer instructions.
impl Cpu {
    // MOV r, r' / MOV r, M / MOV M, r
    mov_op!(op_mov_b_b, B, B);
    mov_op!(op_mov_b_c, B, C);
    mov_op!(op_mov_b_d, B, D);
    mov_op!(op_mov_b_e, B, E);
    mov_op!(op_mov_b_h, B, H);
    mov_op!(op_mov_b_l, B, L);
    mov_op!(op_mov_b_m, B, M);
    mov_op!(op_mov_b_a, B, A);
    mov_op!(op_mov_c_b, C, B);
    mov_op!(op_mov_c_c, C, C);
    mov_op!(op_mov_c_d, C, D);
    mov_op!(op_mov_c_e, C, E);
    mov_op!(op_mov_c_h, C, H);
    mov_op!(op_mov_c_l, C, L);
    mov_op!(op_mov_c_m, C, M);
    mov_op!(op_mov_c_a, C, A);
    mov_op!(op_mov_d_b, D, B);
    mov_op!(op_mov_d_c, D, C);
    mov_op!(op_mov_d_d, D, D);
    mov_op!(op_mov_d_e, D, E);
    mov_op!(op_mov_d_h, D, H);
    mov_op!(op_mov_d_l, D, L);
    mov_op!(op_mov_d_m, D, M);
    mov_op!(op_mov_d_a, D, A);
    mov_op!(op_mov_e_b, E, B);
    mov_op!(op_mov_e_c, E, C);
    mov_op!(op_mov_e_d, E, D);
    mov_op!(op_mov_e_e, E, E);
    mov_op!(op_mov_e_h, E, H);
    mov_op!(op_mov_e_l, E, L);
    mov_op!(op_mov_e_m, E, M);
    mov_op!(op_mov_e_a, E, A);
    mov_op!(op_mov_h_b, H, B);
    mov_op!(op_mov_h_c, H, C);
    mov_op!(op_mov_h_d, H, D);
    mov_op!(op_mov_h_e, H, E);
    mov_op!(op_mov_h_h, H, H);
    mov_op!(op_mov_h_l, H, L);
    mov_op!(op_mov_h_m, H, M);
    mov_op!(op_mov_h_a, H, A);
    mov_op!(op_mov_l_b, L, B);
    mov_op!(op_mov_l_c, L, C);
    mov_op!(op_mov_l_d, L, D);
    mov_op!(op_mov_l_e, L, E);
    mov_op!(op_mov_l_h, L, H);
    mov_op!(op_mov_l_l, L, L);
    mov_op!(op_mov_l_m, L, M);
    mov_op!(op_mov_l_a, L, A);
    mov_op!(op_mov_m_b, M, B);
    mov_op!(op_mov_m_c, M, C);
    mov_op!(op_mov_m_d, M, D);
    mov_op!(op_mov_m_e, M, E);
    mov_op!(op_mov_m_h, M, H);
    mov_op!(op_mov_m_l, M, L);
    mov_op!(op_mov_m_a, M, A);
    mov_op!(op_mov_a_b, A, B);
    mov_op!(op_mov_a_c, A, C);
    mov_op!(op_mov_a_d, A, D);
    mov_op!(op_mov_a_e, A, E);
    mov_op!(op_mov_a_h, A, H);
    mov_op!(op_mov_a_l, A, L);
    mov_op!(op_mov_a_m, A, M);
    mov_op!(op_mov_a_a, A, A);

    // MVI r, d8
    mvi_op!(op_mvi_b, B);
    mvi_op!(op_mvi_c, C);
    mvi_op!(op_mvi_d, D);
    mvi_op!(op_mvi_e, E);
    mvi_op!(op_mvi_h, H);
    mvi_op!(op_mvi_l, L);
    mvi_op!(op_mvi_m, M);
    mvi_op!(op_mvi_a, A);

    // LXI rp, d16
    lxi_op!(op_lxi_b, set_bc);
    lxi_op!(op_lxi_d, set_de);
    lxi_op!(op_lxi_h, set_hl);
    pub fn op_lxi_sp(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.sp = self.imm16();
        Ok(())
    }

    // STA a16 / LDA a16
    pub fn op_sta(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        mem.write_byte(self.imm16(), self.a);
        Ok(())
    }
    pub fn op_lda(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.a = mem.read_byte(self.imm16());
        Ok(())
    }

    // STAX rp / LDAX rp
    pub fn op_stax_b(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        mem.write_byte(self.get_bc(), self.a);
        Ok(())
    }
    pub fn op_stax_d(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        mem.write_byte(self.get_de(), self.a);
        Ok(())
    }
    pub fn op_ldax_b(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.a = mem.read_byte(self.get_bc());
        Ok(())
    }
    pub fn op_ldax_d(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.a = mem.read_byte(self.get_de());
        Ok(())
    }

    // SHLD a16 / LHLD a16: L at the address, H at address+1
    pub fn op_shld(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        let addr = self.imm16();
        mem.write_byte(addr, self.l);
        mem.write_byte(addr.wrapping_add(1), self.h);
        Ok(())
    }
    pub fn op_lhld(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        let addr = self.imm16();
        self.l = mem.read_byte(addr);
        self.h = mem.read_byte(addr.wrapping_add(1));
        Ok(())
    }

    // XCHG: HL <-> DE
    pub fn op_xchg(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        std::mem::swap(&mut self.h, &mut self.d);
        std::mem::swap(&mut self.l, &mut self.e);
        Ok(())
    }

    // XTHL: HL <-> top two stack bytes
    pub fn op_xthl(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        let l = self.l;
        let h = self.h;
        self.l = mem.read_byte(self.sp);
        self.h = mem.read_byte(self.sp.wrapping_add(1));
        mem.write_byte(self.sp, l);
        mem.write_byte(self.sp.wrapping_add(1), h);
        Ok(())
    }

    // SPHL: SP := HL
    pub fn op_sphl(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.sp = self.get_hl();
        Ok(())
    }

    // PUSH rp / PUSH PSW
    pub fn op_push_b(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.stack_push(mem, self.b, self.c);
        Ok(())
    }
    pub fn op_push_d(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.stack_push(mem, self.d, self.e);
        Ok(())
    }
    pub fn op_push_h(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.stack_push(mem, self.h, self.l);
        Ok(())
    }
    pub fn op_push_psw(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        let psw = self.flags.to_psw();
        self.stack_push(mem, self.a, psw);
        Ok(())
    }

    // POP rp / POP PSW
    pub fn op_pop_b(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        let (low, high) = self.stack_pop(mem);
        self.c = low;
        self.b = high;
        Ok(())
    }
    pub fn op_pop_d(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        let (low, high) = self.stack_pop(mem);
        self.e = low;
        self.d = high;
        Ok(())
    }
    pub fn op_pop_h(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        let (low, high) = self.stack_pop(mem);
        self.l = low;
        self.h = high;
        Ok(())
    }
    pub fn op_pop_psw(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        let (psw, a) = self.stack_pop(mem);
        self.flags = Flags::from_psw(psw);
        self.a = a;
        Ok(())
    }
}
