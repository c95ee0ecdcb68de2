use argh::FromArgs;
use r3_algebra::{LinearMap, RandomVec3, Vec3};

#[derive(FromArgs)]
/// A tour of the real 3-dimensional vector space.
struct Args {
    /// seed of the random vector generator
    #[argh(option, short = 's')]
    seed: Option<u64>,

    /// coordinates of random vectors are drawn from [-scale, scale)
    #[argh(option, default = "1e6")]
    scale: f64,

    /// number of random vectors to check
    #[argh(option, short = 'n', default = "3")]
    samples: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    log::info!("R3: 3-dimensional real vector space");
    log::info!("zero = {}", Vec3::ZERO);
    log::info!("standard basis:");
    for v in Vec3::BASIS {
        log::info!("{v}");
    }
    log::info!("2*e1 = {}", Vec3::E1 * 2.0);
    log::info!("e2 + e3 = {}", Vec3::E2 + Vec3::E3);

    // dot and cross products
    for a in Vec3::BASIS {
        for b in Vec3::BASIS {
            log::info!("a = {a}; b = {b}; a . b = {:?}; a x b = {}", a.dot(b), a.cross(b));
        }
    }

    log::info!("Testing that dot is symmetric: a.b = b.a");
    for a in Vec3::BASIS {
        log::info!("a = {a}");
        for b in Vec3::BASIS {
            log::info!("  b = {b}; symmetric: {}", a.dot(b) == b.dot(a));
        }
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("using seed {seed}");
    let mut random = RandomVec3::from_seed(seed, args.scale)?;
    for _ in 0..args.samples {
        let a = random.next_vec();
        log::info!("a = {a}; positive definite: {}", a.dot(a) > 0.0);
        for _ in 0..args.samples {
            let b = random.next_vec();
            log::info!("  b = {b}; symmetric: {}", a.dot(b) == b.dot(a));
        }
    }

    // a cyclic permutation of the axes
    let l = LinearMap::new(Vec3::E2, Vec3::E3, Vec3::E1);
    let v = Vec3::new(1.0, 2.0, 3.0);
    log::info!("L = (e2, e3, e1); L{v} = {}", l.map(v));

    Ok(())
}
