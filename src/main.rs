fn main() {
    charged_sphere::platform::start();
}
