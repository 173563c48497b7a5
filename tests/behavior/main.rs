use libtest_mimic::Arguments;
use libtest_mimic::Trial;
use csvgate::error::Result;


pub use utils::*;

fn main() -> Result<()> {
    let args = Arguments::from_args();

    let client = init_test_service();

    let mut tests = Vec::new();

    operations::list::tests(&client, &mut tests);
    operations::download::tests(&client, &mut tests);
    operations::upload::tests(&client, &mut tests);
    operations::table::tests(&client, &mut tests);

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let conclusion = libtest_mimic::run(&args, tests);

    TEST_FIXTURE.cleanup();

    conclusion.exit()
}
