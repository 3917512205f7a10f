//! Global CSS styles for Cardsmith.
//!
//! Soft rose-to-indigo gradient behind a frosted card, with the editor as a
//! second frosted panel below it.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Dancing+Script:wght@400;700&family=Great+Vibes&family=Merriweather:wght@400;700&family=Montserrat:wght@400;600;700&family=Playfair+Display:wght@400;700&family=Poppins:wght@400;600&family=Roboto:wght@400;500&display=swap');

/* === CSS Custom Properties === */
:root {
  /* ROSE (Primary, focus, accents) */
  --rose-50: #fff1f2;
  --rose-100: #ffe4e6;
  --rose-200: #fecdd3;
  --rose-400: #fb7185;
  --rose-500: #f43f5e;
  --rose-600: #e11d48;
  --rose-700: #be123c;

  /* GRAYS (Text) */
  --gray-300: #d1d5db;
  --gray-500: #6b7280;
  --gray-600: #4b5563;
  --gray-700: #374151;
  --gray-800: #1f2937;

  /* Typography */
  --font-ui: 'Montserrat', sans-serif;
  --font-fancy: 'Great Vibes', cursive;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-ui);
  color: var(--gray-800);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Layout === */
.app-shell {
  min-height: 100vh;
  width: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem 1rem;
  overflow: auto;
  background: linear-gradient(135deg, #ffe4e6 0%, #f5d0fe 50%, #a5b4fc 100%);
}

.app-column {
  position: relative;
  width: 100%;
  max-width: 42rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
  text-align: center;
}

.viewer-actions {
  display: flex;
  justify-content: center;
}

.fade-in {
  animation: fade-in var(--transition-slow) both;
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Card === */
.card {
  position: relative;
  overflow: hidden;
  padding: 3rem;
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.7);
  backdrop-filter: blur(16px);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  transition: transform var(--transition-slow), box-shadow var(--transition-slow);
}

.card:hover {
  transform: scale(1.05);
  box-shadow: 0 25px 50px -12px rgba(253, 164, 175, 0.5);
}

.card-frame {
  position: relative;
  padding: 2rem;
  border: 2px dashed transparent;
  border-radius: 0.75rem;
}

.card-frame.over-background {
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(4px);
}

.card-title {
  font-family: var(--font-fancy);
  font-weight: 400;
  font-size: 3.75rem;
  line-height: 1.1;
  margin-bottom: 1rem;
  text-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.card-centerpiece {
  margin: 2rem 0;
  height: 6rem;
  display: flex;
  justify-content: center;
  align-items: center;
}

.card-message {
  font-size: 1.125rem;
  line-height: 1.625;
  margin-bottom: 2rem;
  white-space: pre-wrap;
}

.card-closing {
  margin-top: 1.5rem;
  text-align: right;
}

.card-signature {
  font-family: var(--font-fancy);
  font-size: 1.875rem;
}

.card-name {
  font-weight: 600;
  margin-top: 0.25rem;
}

/* === Corner Ornaments === */
.corner {
  position: absolute;
}

.corner.star {
  width: 2rem;
  height: 2rem;
}

.corner.floral {
  width: 4rem;
  height: 4rem;
}

.corner.top-left { top: 0; left: 0; }
.corner.top-right { top: 0; right: 0; }
.corner.bottom-left { bottom: 0; left: 0; }
.corner.bottom-right { bottom: 0; right: 0; }

.corner.star.top-left { transform: translate(-50%, -50%); }
.corner.star.top-right { transform: translate(50%, -50%); }
.corner.star.bottom-left { transform: translate(-50%, 50%); }
.corner.star.bottom-right { transform: translate(50%, 50%); }

/* === Background === */
.card-background {
  position: absolute;
  inset: 0;
}

.card-background.single,
.collage-cell {
  background-size: cover;
  background-position: center;
}

.card-background.collage {
  display: grid;
  gap: 0.25rem;
}

.background-wash {
  position: absolute;
  inset: 0;
  background: rgba(255, 255, 255, 0.2);
}

/* === Centerpieces === */
.centerpiece {
  position: relative;
}

.centerpiece.heart {
  width: 5rem;
  height: 5rem;
}

.centerpiece.heart svg {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
}

.heart-glow {
  animation: heart-ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
  opacity: 0.75;
}

.heart-beat {
  animation: heart-pulse 1.5s ease-in-out infinite;
}

@keyframes heart-ping {
  75%, 100% { transform: scale(1.5); opacity: 0; }
}

@keyframes heart-pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.1); }
}

.centerpiece.fireworks,
.centerpiece.confetti {
  width: 100%;
  height: 100%;
  overflow: visible;
}

.firework-particle {
  position: absolute;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  opacity: 0;
  animation: firework-burst 1.5s ease-out infinite;
}

@keyframes firework-burst {
  0% { transform: translate(0, 0) scale(1); opacity: 1; }
  100% { transform: translate(var(--dx), var(--dy)) scale(0); opacity: 0; }
}

.confetti-particle {
  position: absolute;
  width: 8px;
  height: 16px;
  opacity: 0;
  animation: confetti-fall 2.5s ease-out infinite;
}

@keyframes confetti-fall {
  0% { transform: translateY(-100px) rotateZ(0deg); opacity: 1; }
  100% { transform: translateY(100px) rotateZ(720deg); opacity: 0; }
}

.centerpiece.grad-cap {
  width: 6rem;
  height: 6rem;
}

.tassel {
  transform-origin: top center;
  animation: tassel-swing 2.5s ease-in-out infinite;
}

@keyframes tassel-swing {
  0%, 100% { transform: rotate(5deg); }
  50% { transform: rotate(-5deg); }
}

.centerpiece.sparkle {
  width: 5rem;
  height: 5rem;
}

.sparkle-star {
  position: absolute;
  width: 100%;
  height: 100%;
  inset: 0;
  animation: sparkle-anim 2s ease-in-out infinite;
}

.sparkle-star.small {
  width: 50%;
  height: 50%;
}

.sparkle-star.top-left { inset: 0 auto auto 0; }
.sparkle-star.bottom-right { inset: auto 0 0 auto; }

@keyframes sparkle-anim {
  0%, 100% { transform: scale(0.8); opacity: 0.7; }
  50% { transform: scale(1); opacity: 1; }
}

/* === Customization Panel === */
.customization-panel {
  width: 100%;
  padding: 2rem;
  border-radius: 1rem;
  text-align: left;
  background: rgba(255, 255, 255, 0.6);
  backdrop-filter: blur(16px);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.panel-title {
  font-size: 1.5rem;
  font-weight: 700;
  text-align: center;
  color: var(--gray-800);
  margin-bottom: 1.5rem;
}

.panel-sections {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.section-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1.5rem;
}

/* === Accordion === */
.accordion-item {
  border: 1px solid rgba(254, 205, 211, 0.8);
  border-radius: 0.5rem;
  overflow: hidden;
}

.accordion-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  width: 100%;
  padding: 1rem;
  font: inherit;
  font-weight: 600;
  text-align: left;
  color: var(--gray-800);
  background: var(--rose-50);
  border: none;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.accordion-header:hover {
  background: var(--rose-100);
}

.chevron {
  width: 1rem;
  height: 1rem;
  flex-shrink: 0;
  transition: transform var(--transition-normal);
}

.chevron.open {
  transform: rotate(180deg);
}

.accordion-body {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 1rem;
  background: white;
}

.accordion-body.hidden {
  display: none;
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
}

.input-label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--gray-700);
  margin-bottom: 0.25rem;
}

.input-field {
  width: 100%;
  padding: 0.75rem;
  font: inherit;
  border: 1px solid var(--gray-300);
  border-radius: 0.5rem;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  transition: box-shadow var(--transition-fast), border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: transparent;
  box-shadow: 0 0 0 2px var(--rose-400);
}

.input-field.textarea {
  resize: vertical;
}

.char-counter,
.field-help {
  font-size: 0.75rem;
  color: var(--gray-500);
  margin-top: 0.25rem;
}

.char-counter {
  text-align: right;
}

/* === Colors === */
.color-field {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.color-label {
  font-size: 0.875rem;
  color: var(--gray-600);
}

.color-swatch {
  width: 2rem;
  height: 2rem;
  padding: 0.25rem;
  border: 1px solid var(--gray-300);
  border-radius: 0.375rem;
  cursor: pointer;
}

.color-swatch-lg {
  width: 2.5rem;
  height: 2.5rem;
}

.text-colors {
  border-top: 1px solid var(--rose-200);
  padding-top: 1.5rem;
}

.color-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem 1.5rem;
  margin-top: 0.75rem;
}

/* === Images === */
.image-upload-btn {
  align-self: flex-start;
  padding: 0.5rem 1rem;
  font: inherit;
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--rose-700);
  background: var(--rose-50);
  border: none;
  border-radius: 9999px;
  cursor: pointer;
}

.image-upload-btn:hover:not(:disabled) {
  background: var(--rose-100);
}

.image-upload-btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.thumbnail-strip {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.thumbnail {
  position: relative;
}

.thumbnail img {
  width: 4rem;
  height: 4rem;
  object-fit: cover;
  border-radius: 0.375rem;
}

.remove-btn {
  position: absolute;
  top: 0;
  right: 0;
  width: 1.25rem;
  height: 1.25rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 0.75rem;
  color: white;
  background: #ef4444;
  border: none;
  border-radius: 9999px;
  opacity: 0;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.thumbnail:hover .remove-btn {
  opacity: 1;
}

/* === Buttons === */
.btn-primary,
.btn-pill,
.btn-ghost {
  font: inherit;
  font-weight: 700;
  border: none;
  cursor: pointer;
  transition: transform var(--transition-normal), background var(--transition-normal);
}

.btn-primary {
  padding: 0.75rem 2rem;
  color: white;
  background: var(--rose-500);
  border-radius: 0.5rem;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}

.btn-pill {
  padding: 0.75rem 1.5rem;
  color: white;
  background: var(--rose-500);
  border-radius: 9999px;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.btn-ghost {
  padding: 0.5rem 1rem;
  color: var(--rose-600);
  background: transparent;
}

.btn-primary:hover:not(:disabled),
.btn-pill:hover {
  background: var(--rose-600);
  transform: scale(1.05);
}

.btn-primary:disabled {
  background: #9ca3af;
  cursor: not-allowed;
  transform: none;
}

.share-section {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  text-align: center;
}
"#;
