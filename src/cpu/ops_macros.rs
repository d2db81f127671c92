// --- Transfer Macros ---
macro_rules! mov_op {
    ($name:ident, $dst:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(
            &mut self,
            mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            let value = self.read_reg(mem, super::Register::$src);
            self.write_reg(mem, super::Register::$dst, value);
            Ok(())
        }
    };
}
macro_rules! mvi_op {
    ($name:ident, $dst:ident) => {
        pub fn $name(
            &mut self,
            mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            let imm = self.imm8();
            self.write_reg(mem, super::Register::$dst, imm);
            Ok(())
        }
    };
}
macro_rules! lxi_op {
    ($name:ident, $set:ident) => {
        pub fn $name(
            &mut self,
            _mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            let imm = self.imm16();
            self.$set(imm);
            Ok(())
        }
    };
}

// --- ALU Macros ---
// Arithmetic ops funnel through the carry-aware helpers; logic and compare
// ops take the operand alone.
macro_rules! arith_op {
    ($name:ident, $op:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(
            &mut self,
            mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            let value = self.read_reg(mem, super::Register::$src);
            self.$op(value, false);
            Ok(())
        }
    };
    ($name:ident, $op:ident, $src:ident, carry) => {
        #[inline(always)]
        pub fn $name(
            &mut self,
            mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            let value = self.read_reg(mem, super::Register::$src);
            self.$op(value, true);
            Ok(())
        }
    };
}
macro_rules! logic_op {
    ($name:ident, $op:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(
            &mut self,
            mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            let value = self.read_reg(mem, super::Register::$src);
            self.$op(value);
            Ok(())
        }
    };
}
macro_rules! inr_op {
    ($name:ident, $reg:ident) => {
        pub fn $name(
            &mut self,
            mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            self.inr(mem, super::Register::$reg);
            Ok(())
        }
    };
}
macro_rules! dcr_op {
    ($name:ident, $reg:ident) => {
        pub fn $name(
            &mut self,
            mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            self.dcr(mem, super::Register::$reg);
            Ok(())
        }
    };
}

// --- Register Pair Macros ---
macro_rules! inx_op {
    ($name:ident, $get:ident, $set:ident) => {
        pub fn $name(
            &mut self,
            _mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            let value = self.$get().wrapping_add(1);
            self.$set(value);
            Ok(())
        }
    };
}
macro_rules! dcx_op {
    ($name:ident, $get:ident, $set:ident) => {
        pub fn $name(
            &mut self,
            _mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            let value = self.$get().wrapping_sub(1);
            self.$set(value);
            Ok(())
        }
    };
}
macro_rules! dad_op {
    ($name:ident, $get:ident) => {
        pub fn $name(
            &mut self,
            _mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            let value = self.$get();
            self.dad(value);
            Ok(())
        }
    };
}

// --- Control Macros ---
macro_rules! rst_op {
    ($name:ident, $code:expr) => {
        pub fn $name(
            &mut self,
            mem: &mut crate::memory::Memory,
            _ports: &mut crate::ports::PortBank,
            _interrupts: &crate::interrupts::Interrupts,
        ) -> super::CpuResult<()> {
            self.call(mem, ($code as u16) << 3);
            Ok(())
        }
    };
}
