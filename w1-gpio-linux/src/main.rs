use clap::Parser;
use gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::CdevPin;
use w1_bus::{BusMaster, MasterRegistry};
use w1_gpio::{DRIVER_NAME, GpioLines, LineMode, LineRole, W1Gpio, W1GpioConfig};

/// Bit-level exerciser for a GPIO 1-Wire bus master
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the GPIO character device (e.g., /dev/gpiochip0)
    #[arg(short, long)]
    chip: String,
    /// Line offset of the 1-Wire data line
    #[arg(short, long)]
    data: u32,
    /// Line offset of the strong pull-up line, if wired
    #[arg(long)]
    strong_pullup: Option<u32>,
    /// Line offset of the pull-down line, if wired
    #[arg(long)]
    pulldown: Option<u32>,
    /// The data line is made open drain by external circuitry
    #[arg(long)]
    open_drain: bool,
    /// Fire a strong pull-up pulse of this many milliseconds before sampling
    #[arg(long)]
    pullup_ms: Option<u32>,
    /// Number of bits to sample before detaching (samples forever when omitted)
    #[arg(short, long)]
    samples: Option<u64>,
}

/// Claims 1-Wire bus lines from a GPIO character device.
struct CdevLines {
    chip: Chip,
    offsets: [Option<u32>; 3],
}

impl CdevLines {
    fn new(chip: Chip, data: u32, strong_pullup: Option<u32>, pulldown: Option<u32>) -> Self {
        CdevLines {
            chip,
            offsets: [Some(data), strong_pullup, pulldown],
        }
    }
}

impl GpioLines for CdevLines {
    type Line = CdevPin;
    type Error = gpio_cdev::Error;

    fn request(&mut self, role: LineRole, mode: LineMode) -> Result<Option<CdevPin>, Self::Error> {
        let offset = match self.offsets[role.index()] {
            Some(offset) => offset,
            None => return Ok(None),
        };
        let flags = match mode {
            LineMode::Input => LineRequestFlags::INPUT,
            LineMode::OutputLow => LineRequestFlags::OUTPUT,
            LineMode::OpenDrainOutputLow => LineRequestFlags::OUTPUT | LineRequestFlags::OPEN_DRAIN,
        };
        let handle = self.chip.get_line(offset)?.request(flags, 0, DRIVER_NAME)?;
        Ok(Some(CdevPin::new(handle)?))
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();
    // Parse command line arguments
    let args = Args::parse();
    // Open the GPIO character device
    let chip = Chip::new(&args.chip).expect("Failed to open GPIO character device");
    let lines = CdevLines::new(chip, args.data, args.strong_pullup, args.pulldown);
    let config = W1GpioConfig::new(lines).with_external_open_drain(args.open_drain);
    // Claim the lines and register the bus master
    let mut bus: MasterRegistry<_, 1> = MasterRegistry::new();
    let device = W1Gpio::attach(Some(config), linux_embedded_hal::Delay, &mut bus)
        .expect("Failed to attach GPIO bus master");
    {
        let master = bus.get_mut(device.handle()).expect("Master not registered");
        log::info!(
            "{} attached, strong pull-up {}",
            DRIVER_NAME,
            if master.supports_set_pullup() {
                "advertised"
            } else {
                "not advertised"
            }
        );
        // Fire a test pulse when requested
        if let Some(duration) = args.pullup_ms {
            master.set_pullup(duration);
            master.set_pullup(0);
            log::info!("strong pull-up pulsed for {} ms", duration);
        }
        // Sample the bus
        match args.samples {
            Some(count) => {
                for _ in 0..count {
                    log::info!("bit: {}", master.read_bit() as u8);
                }
            }
            None => loop {
                log::info!("bit: {}", master.read_bit() as u8);
            },
        }
    }
    // Surrender the lines
    device.detach(&mut bus);
    log::info!("{} detached", DRIVER_NAME);
}
