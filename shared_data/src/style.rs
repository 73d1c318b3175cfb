use const_format::concatcp;

use crate::WIDE_LAYOUT_PX;

// the media queries need the breakpoint as a literal
const WIDE: &str = concatcp!("@media (min-width: ", WIDE_LAYOUT_PX, "px)");

pub static LANDING_STYLE: &str = concatcp!(r#"
nav#top-nav {
	position: fixed;
	top: 0;
	left: 0;
	width: 100%;
	z-index: 50;
	background-color: var(--nav-background);
	border-bottom: 1px solid var(--nav-border);
}
#nav-bar {
	max-width: 1280px;
	margin: 0 auto;
	padding: 12px 24px;
	display: flex;
	align-items: center;
	justify-content: space-between;
}
.social-links, .nav-links {
	display: none;
	gap: 16px;
	color: var(--accent);
	list-style: none;
	margin: 0;
	padding: 0;
}
.nav-links a {
	text-decoration: none;
	letter-spacing: 0.2em;
	font-size: 14px;
	padding-bottom: 4px;
}
.nav-links a:hover {
	border-bottom: 2px solid var(--accent);
}
#hamburger {
	background: none;
	border: none;
	color: var(--accent);
	cursor: pointer;
}
#menu-overlay {
	position: fixed;
	inset: 56px 0 0 0;
	z-index: 40;
	background-color: rgba(0, 0, 0, 0.5);
	opacity: 0;
	pointer-events: none;
	transition: opacity 0.3s;
}
#menu-overlay.open {
	opacity: 1;
	pointer-events: auto;
}
#mobile-menu {
	position: fixed;
	top: 56px;
	left: 0;
	right: 0;
	z-index: 50;
	background-color: var(--nav-background);
	padding: 24px 24px 40px 24px;
	display: flex;
	flex-direction: column;
	align-items: center;
	gap: 20px;
	transform: translateY(-50px);
	opacity: 0;
	pointer-events: none;
	transition: transform 0.3s, opacity 0.3s;
}
#mobile-menu.open {
	transform: translateY(0);
	opacity: 1;
	pointer-events: auto;
}
#mobile-menu .social-links, #mobile-menu .nav-links {
	display: flex;
}
#mobile-menu .nav-links {
	flex-direction: column;
	align-items: center;
}
#home {
	position: relative;
	height: 80vh;
	display: flex;
	align-items: center;
	justify-content: center;
	overflow: hidden;
}
.hero-slide {
	position: absolute;
	inset: 0;
	width: 100%;
	height: 100%;
	object-fit: cover;
	pointer-events: none;
	user-select: none;
}
#hero-shade {
	position: absolute;
	inset: 0;
	background-color: rgba(0, 0, 0, 0.6);
}
#hero-content {
	position: relative;
	z-index: 10;
	text-align: center;
	color: white;
	max-width: 896px;
	padding: 0 16px;
}
#hero-content h1 {
	font-size: 40px;
	margin: 0 0 16px 0;
}
#hero-actions {
	display: flex;
	flex-wrap: wrap;
	justify-content: center;
	gap: 16px;
}
section.split {
	max-width: 1280px;
	margin: 0 auto;
	padding: 80px 24px;
	display: grid;
	gap: 40px;
	align-items: center;
}
#features {
	color: white;
	text-align: center;
	padding: 80px 24px;
	background-size: cover;
	background-position: center;
	background-image: linear-gradient(rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.7)), url("https://images.unsplash.com/photo-1504215680853-026ed2a45def");
}
#feature-list {
	display: flex;
	flex-wrap: wrap;
	justify-content: center;
	gap: 32px;
	font-size: 20px;
}
#room-grid, #gallery-grid {
	max-width: 1280px;
	margin: 0 auto;
	padding: 48px 24px;
	display: grid;
	gap: 24px;
}
.room-card {
	background-color: white;
	box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
	transition: transform 0.2s;
}
.room-card:hover {
	transform: scale(1.05);
}
.room-card > img {
	width: 100%;
	height: 224px;
	object-fit: cover;
}
.room-details {
	color: white;
	text-align: center;
	padding: 16px 16px 40px 16px;
	background-color: var(--accent);
	clip-path: polygon(0 0, 100% 0, 100% 85%, 50% 100%, 0 85%);
}
.room-price {
	font-size: 24px;
	font-weight: bold;
}
.room-actions {
	display: flex;
	justify-content: center;
	gap: 8px;
	margin-top: 12px;
}
.room-actions a {
	background-color: white;
	color: var(--accent);
	padding: 4px 12px;
	text-decoration: none;
	font-weight: 600;
}
.service {
	border-left: 3px solid var(--accent);
	padding-left: 12px;
}
#gallery-grid img {
	width: 100%;
	height: 256px;
	object-fit: cover;
}
#contact iframe {
	width: 100%;
	height: 360px;
	border: 0;
}
footer {
	background-color: #111827;
	color: #d1d5db;
	text-align: center;
	padding: 24px;
}
#footer-links {
	display: flex;
	flex-wrap: wrap;
	justify-content: center;
	gap: 16px;
	margin-bottom: 8px;
}
"#, WIDE, r#" {
	.social-links, .nav-links {
		display: flex;
	}
	#hamburger, #mobile-menu, #menu-overlay {
		display: none;
	}
	section.split {
		grid-template-columns: 1fr 1fr;
	}
	#room-grid {
		grid-template-columns: repeat(4, 1fr);
	}
	#gallery-grid {
		grid-template-columns: repeat(4, 1fr);
	}
	#hero-content h1 {
		font-size: 60px;
	}
}
"#);

pub static FLOATING_STYLE: &str = r"
.floating-contact {
	position: fixed;
	bottom: 40px;
	z-index: 100;
	width: 56px;
	height: 56px;
	border-radius: 50%;
	display: flex;
	align-items: center;
	justify-content: center;
	color: white;
	font-size: 26px;
	text-decoration: none;
	transition: transform 0.12s;
}
.floating-contact:hover {
	transform: scale(1.1) translateY(-4px);
	filter: brightness(1.1);
}
#floating-whatsapp {
	left: 16px;
	background-color: var(--whatsapp);
	box-shadow: 0 5px 30px rgba(40, 200, 100, 0.2), 0 2px 6px rgba(0, 0, 0, 0.1);
}
#floating-call {
	right: 16px;
	background-color: var(--accent);
	box-shadow: 0 5px 30px rgba(255, 36, 77, 0.18), 0 2px 6px rgba(0, 0, 0, 0.09);
}
@media (max-width: 500px) {
	.floating-contact {
		bottom: 18px;
	}
}
";

pub static ENQUIRY_STYLE: &str = r"
#enquiry {
	background-color: white;
	box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
	border-radius: 12px;
	padding: 20px;
	max-width: 448px;
	margin: 40px auto;
}
#enquiry > h2 {
	color: var(--heading-blue);
	text-align: center;
	letter-spacing: 0.025em;
}
#enquiry form {
	display: flex;
	flex-direction: column;
	gap: 12px;
}
#enquiry-row {
	display: flex;
	gap: 8px;
}
#enquiry-row > .field:first-child {
	flex: 1;
}
#enquiry-row > .field:last-child {
	width: 96px;
}
.field {
	width: 100%;
	border-radius: 4px;
	padding: 8px 12px;
	font-size: 16px;
	outline: none;
	color: var(--heading-blue);
	background-color: var(--field-background);
	border: 1.5px solid var(--field-border);
	transition: border-color 0.15s;
}
.field.is-focused {
	border-color: var(--field-focus);
}
.field::placeholder {
	color: #65748b;
	opacity: 1;
}
textarea.field {
	resize: none;
}
#enquiry-submit {
	margin-top: 8px;
	width: 100%;
	padding: 8px;
	border: none;
	border-radius: 4px;
	font-weight: 600;
	letter-spacing: 0.02em;
	color: white;
	background-color: var(--field-focus);
	cursor: pointer;
}
#enquiry-submit.is-hovered {
	background-color: #174073;
}
#enquiry-notice {
	color: var(--accent-hover);
	text-align: center;
}
";

pub static POLICY_STYLE: &str = r"
#policy {
	min-height: 100vh;
	padding: 48px 24px;
	background-color: var(--policy-background);
	color: var(--policy-text);
}
#policy * {
	color: var(--policy-text);
}
#policy-body {
	max-width: 896px;
	margin: 0 auto;
	font-size: 18px;
	line-height: 1.6;
}
#policy-body > h1 {
	font-size: 44px;
	font-weight: 600;
}
.back-home-link {
	display: block;
	width: max-content;
	margin: 40px auto 0 auto;
	padding: 8px 24px;
	border-radius: 4px;
	text-decoration: none;
	background-color: var(--policy-text);
}
#policy .back-home-link {
	color: white;
}
.back-home-link:hover {
	background-color: #452501;
}
";
