use super::{constants::*, Cpu, CpuResult};
use crate::interrupts::Interrupts;
use crate::memory::Memory;
use crate::ports::PortBank;

// --- Control Flow Implementations ---
impl Cpu {
    // NOP
    pub fn op_nop(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        Ok(())
    }

    // JMP a16 / Jcc a16
    // Untaken jumps cost the same as taken ones; PC is already past the
    // three-byte instruction.
    fn conditional_jump(&mut self, condition: bool) {
        if condition {
            self.pc = self.imm16();
        }
    }
    pub fn op_jmp(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.pc = self.imm16();
        Ok(())
    }
    pub fn op_jnz(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_jump(!self.flags.z);
        Ok(())
    }
    pub fn op_jz(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_jump(self.flags.z);
        Ok(())
    }
    pub fn op_jnc(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_jump(!self.flags.cy);
        Ok(())
    }
    pub fn op_jc(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_jump(self.flags.cy);
        Ok(())
    }
    pub fn op_jpo(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_jump(!self.flags.p);
        Ok(())
    }
    pub fn op_jpe(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_jump(self.flags.p);
        Ok(())
    }
    pub fn op_jp(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_jump(!self.flags.s);
        Ok(())
    }
    pub fn op_jm(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_jump(self.flags.s);
        Ok(())
    }

    // PCHL: PC := HL
    pub fn op_pchl(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.pc = self.get_hl();
        Ok(())
    }

    // CALL a16 / Ccc a16
    // An untaken conditional call skips the push and reports 11 cycles
    // through the override.
    fn conditional_call(&mut self, mem: &mut Memory, condition: bool) {
        if condition {
            let addr = self.imm16();
            self.call(mem, addr);
        } else {
            self.cycle_override = Some(SKIPPED_CALL_CYCLES);
        }
    }
    pub fn op_call(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        let addr = self.imm16();
        self.call(mem, addr);
        Ok(())
    }
    pub fn op_cnz(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_call(mem, !self.flags.z);
        Ok(())
    }
    pub fn op_cz(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_call(mem, self.flags.z);
        Ok(())
    }
    pub fn op_cnc(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_call(mem, !self.flags.cy);
        Ok(())
    }
    pub fn op_cc(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_call(mem, self.flags.cy);
        Ok(())
    }
    pub fn op_cpo(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_call(mem, !self.flags.p);
        Ok(())
    }
    pub fn op_cpe(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_call(mem, self.flags.p);
        Ok(())
    }
    pub fn op_cp(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_call(mem, !self.flags.s);
        Ok(())
    }
    pub fn op_cm(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_call(mem, self.flags.s);
        Ok(())
    }

    // RET / Rcc
    // An untaken conditional return reports 5 cycles through the override.
    fn conditional_ret(&mut self, mem: &Memory, condition: bool) {
        if condition {
            self.ret(mem);
        } else {
            self.cycle_override = Some(SKIPPED_RETURN_CYCLES);
        }
    }
    pub fn op_ret(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.ret(mem);
        Ok(())
    }
    pub fn op_rnz(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_ret(mem, !self.flags.z);
        Ok(())
    }
    pub fn op_rz(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_ret(mem, self.flags.z);
        Ok(())
    }
    pub fn op_rnc(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_ret(mem, !self.flags.cy);
        Ok(())
    }
    pub fn op_rc(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_ret(mem, self.flags.cy);
        Ok(())
    }
    pub fn op_rpo(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_ret(mem, !self.flags.p);
        Ok(())
    }
    pub fn op_rpe(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_ret(mem, self.flags.p);
        Ok(())
    }
    pub fn op_rp(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_ret(mem, !self.flags.s);
        Ok(())
    }
    pub fn op_rm(
        &mut self,
        mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.conditional_ret(mem, self.flags.s);
        Ok(())
    }

    // RST n: one-byte CALL to n*8
    rst_op!(op_rst_0, 0);
    rst_op!(op_rst_1, 1);
    rst_op!(op_rst_2, 2);
    rst_op!(op_rst_3, 3);
    rst_op!(op_rst_4, 4);
    rst_op!(op_rst_5, 5);
    rst_op!(op_rst_6, 6);
    rst_op!(op_rst_7, 7);

    // IN d8 / OUT d8
    pub fn op_in(
        &mut self,
        _mem: &mut Memory,
        ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.a = ports.read_port(self.imm8());
        Ok(())
    }
    pub fn op_out(
        &mut self,
        _mem: &mut Memory,
        ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        ports.write_port(self.imm8(), self.a);
        Ok(())
    }

    // EI / DI: the INTE bit lives in the interrupt latch.
    pub fn op_ei(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        interrupts: &Interrupts,
    ) -> CpuResult<()> {
        interrupts.enable_interrupts();
        Ok(())
    }
    pub fn op_di(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        interrupts: &Interrupts,
    ) -> CpuResult<()> {
        interrupts.disable_interrupts();
        Ok(())
    }

    // HLT: PC already points past the instruction; only the driver's
    // interrupt staging restarts the CPU.
    pub fn op_hlt(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        self.halted = true;
        Ok(())
    }

    // RIM / SIM exist only on the 8085; the Space Invaders ROM never issues
    // them, so reaching one means this is a different program.
    pub fn op_rim(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        Err("RIM is an 8085-only instruction and is not implemented".to_string())
    }
    pub fn op_sim(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        Err("SIM is an 8085-only instruction and is not implemented".to_string())
    }

    // --- Invalid Opcode Handler ---
    pub fn handle_invalid_opcode(
        &mut self,
        _mem: &mut Memory,
        _ports: &mut PortBank,
        _interrupts: &Interrupts,
    ) -> CpuResult<()> {
        Err(format!(
            "opcode {:#04x} has not been implemented",
            self.current[0]
        ))
    }
}
